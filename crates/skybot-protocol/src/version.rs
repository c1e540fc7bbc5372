use crate::ProtocolError;

/// Protocol version this crate's records match.
///
/// The host sends its version in the `hello` request; any other value
/// means the record layouts may differ and no further message can be
/// trusted.
pub const PROTOCOL_VERSION: u64 = 22;

/// Compares the host's version against [`PROTOCOL_VERSION`].
pub fn check_version(actual: u64) -> Result<(), ProtocolError> {
    if actual == PROTOCOL_VERSION {
        Ok(())
    } else {
        Err(ProtocolError::ProtocolVersionMismatch {
            expected: PROTOCOL_VERSION,
            actual,
        })
    }
}
