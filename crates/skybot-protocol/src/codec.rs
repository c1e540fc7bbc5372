//! Codec trait and the JSON implementation used on the bot wire.
//!
//! A codec converts between protocol values and raw bytes. The transport
//! adapter only holds something that implements [`Codec`]; it never
//! calls serde_json directly, so every failure it sees is already one of
//! the typed [`ProtocolError`] kinds.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::ProtocolError;

/// Encodes protocol values to bytes and decodes bytes back.
///
/// `Send + Sync + 'static` so one codec can be shared by every request
/// task the server spawns.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// [`ProtocolError::InvalidVariantState`] if the value contains an
    /// uninitialized [`VariantCell`](crate::VariantCell), otherwise
    /// [`ProtocolError::Encode`].
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes into a value.
    ///
    /// # Errors
    /// [`ProtocolError::Malformed`] for input that is not JSON, or one of
    /// the structural kinds (missing case, unknown case, missing field,
    /// type mismatch) when the JSON does not fit `T`.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that speaks JSON via `serde_json`.
///
/// ```rust
/// use skybot_protocol::{Codec, Command, CommandSurrender, JsonCodec};
///
/// let codec = JsonCodec;
/// let bytes = codec.encode(&Command::from(CommandSurrender {})).unwrap();
/// assert_eq!(bytes, br#"{"Surrender":{}}"#);
///
/// let decoded: Command = codec.decode(&bytes).unwrap();
/// assert_eq!(decoded, Command::Surrender(CommandSurrender {}));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::from_encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::from_decode)
    }
}

/// Encodes a value into an in-memory JSON tree.
///
/// The tree is read back from the encoded bytes rather than built with
/// `serde_json::to_value`. A `Value` stores every float as `f64`, and an
/// `f32` widened that way prints with its binary tail
/// (`0.10000000149011612`). Parsing the text keeps the decimal the byte
/// encoder wrote, so re-encoding the tree gives the same bytes as
/// [`JsonCodec::encode`].
///
/// ```rust
/// use skybot_protocol::{to_value, Position2D};
///
/// let value = to_value(&Position2D { x: 0.1, y: 2.0 }).unwrap();
/// assert_eq!(value.to_string(), r#"{"x":0.1,"y":2.0}"#);
/// ```
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, ProtocolError> {
    let bytes = serde_json::to_vec(value).map_err(ProtocolError::from_encode)?;
    serde_json::from_slice(&bytes).map_err(ProtocolError::Encode)
}

/// Decodes a value from an in-memory JSON tree.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(value).map_err(ProtocolError::from_decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Command, CommandBarrierGateToggle, Target, TargetMulti, Position2D,
    };

    #[test]
    fn test_json_codec_roundtrip() {
        let codec = JsonCodec;
        let cmd = Command::from(CommandBarrierGateToggle {
            barrier_id: crate::EntityId(77),
        });
        let bytes = codec.encode(&cmd).unwrap();
        assert_eq!(bytes, br#"{"BarrierGateToggle":{"barrier_id":77}}"#);
        let decoded: Command = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, cmd);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let result: Result<Command, _> = JsonCodec.decode(b"not json");
        assert!(matches!(result, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_decode_truncated_is_malformed() {
        let result: Result<Command, _> = JsonCodec.decode(br#"{"Surrender":{"#);
        assert!(matches!(result, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn test_decode_non_object_is_type_mismatch() {
        let result: Result<Target, _> = JsonCodec.decode(br#""Multi""#);
        match result {
            Err(ProtocolError::TypeMismatch(msg)) => {
                assert!(msg.contains("single-key `Target` object"), "{msg}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_empty_object_is_missing_case() {
        let result: Result<Target, _> = JsonCodec.decode(b"{}");
        match result {
            Err(ProtocolError::MissingVariantCase { family }) => {
                assert_eq!(family, "Target");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_case() {
        let result: Result<Command, _> = JsonCodec.decode(br#"{"NotARealCase":{}}"#);
        match result {
            Err(ProtocolError::UnknownVariantCase { family, case }) => {
                assert_eq!(family, "Command");
                assert_eq!(case, "NotARealCase");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_nested_missing_field() {
        let result: Result<Target, _> =
            JsonCodec.decode(br#"{"Multi":{"xy_begin":{"x":1.0,"y":2.0}}}"#);
        match result {
            Err(ProtocolError::MissingRequiredField { field }) => {
                assert_eq!(field, "xy_end");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_to_value_matches_byte_encoding() {
        let target = Target::Multi(TargetMulti {
            xy_begin: Position2D { x: 0.1, y: 0.3 },
            xy_end: Position2D { x: -7.7, y: 1e-7 },
        });
        let bytes = JsonCodec.encode(&target).unwrap();
        let value = to_value(&target).unwrap();
        assert_eq!(serde_json::to_vec(&value).unwrap(), bytes);
    }

    #[test]
    fn test_decode_backtick_label_is_kept_whole() {
        let result: Result<Command, _> = JsonCodec.decode(br#"{"a`b":{}}"#);
        match result {
            Err(ProtocolError::UnknownVariantCase { family, case }) => {
                assert_eq!(family, "Command");
                assert_eq!(case, "a`b");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_value_helpers_roundtrip() {
        let target = Target::Multi(TargetMulti {
            xy_begin: Position2D { x: 0.5, y: 1.5 },
            xy_end: Position2D { x: 2.0, y: 3.0 },
        });
        let value = to_value(&target).unwrap();
        assert!(value.get("Multi").is_some());
        let back: Target = from_value(value).unwrap();
        assert_eq!(back, target);
    }
}
