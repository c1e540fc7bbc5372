//! Error types for the protocol layer.
//!
//! Every failure the codec can produce is one of the typed kinds below.
//! There is no partial decode: the first error aborts the whole message
//! and is handed back to the caller (usually the transport adapter, which
//! decides how to report it).

use std::cell::RefCell;

/// serde's own wording for an absent non-optional struct field.
const SERDE_MISSING_FIELD: &str = "missing field";

thread_local! {
    /// Variant failure raised by the current serde call on this thread.
    ///
    /// serde errors only carry a message, so the variant visitor and
    /// [`VariantCell`](crate::VariantCell) park the typed error here and
    /// [`ProtocolError::from_decode`] / [`ProtocolError::from_encode`]
    /// take it back out. Serialization is synchronous, so the slot is
    /// always read on the thread that filled it.
    static PARKED: RefCell<Option<ProtocolError>> = const { RefCell::new(None) };
}

/// Turns a variant failure into a deserializer error, keeping the typed
/// value for [`ProtocolError::from_decode`].
pub(crate) fn raise_de<E: serde::de::Error>(fault: ProtocolError) -> E {
    let err = E::custom(&fault);
    park(fault);
    err
}

/// Turns a variant failure into a serializer error, keeping the typed
/// value for [`ProtocolError::from_encode`].
pub(crate) fn raise_ser<E: serde::ser::Error>(fault: ProtocolError) -> E {
    let err = E::custom(&fault);
    park(fault);
    err
}

fn park(fault: ProtocolError) {
    PARKED.with(|slot| slot.replace(Some(fault)));
}

/// Takes the parked fault if it is the one `message` reports. A fault left
/// behind by an error nobody classified is dropped here.
fn take_parked(message: &str) -> Option<ProtocolError> {
    let fault = PARKED.with(|slot| slot.take())?;
    message.starts_with(&fault.to_string()).then_some(fault)
}

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Encoding was attempted on a variant that never had a case set.
    ///
    /// Only reachable through [`VariantCell`](crate::VariantCell): the
    /// protocol enums themselves cannot be constructed case-less.
    #[error("variant `{family}` has no case set")]
    InvalidVariantState { family: String },

    /// A variant object had no keys (`{}`).
    #[error("no case key in `{family}` object")]
    MissingVariantCase { family: String },

    /// A variant object's key is not a case of its family.
    #[error("unknown case `{case}` for `{family}`")]
    UnknownVariantCase { family: String, case: String },

    /// A required record field was absent.
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: String },

    /// A JSON value had the wrong type or an out-of-range value
    /// (string where a number was expected, negative id, wrong array length).
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The input was not JSON at all (syntax error or truncated body).
    #[error("malformed json: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Serialization failed for a reason other than an uninitialized variant.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The host speaks a different protocol version.
    #[error("protocol version mismatch: expected {expected}, got {actual}")]
    ProtocolVersionMismatch { expected: u64, actual: u64 },

    /// The request path does not name a known route.
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
}

impl ProtocolError {
    /// Classifies a serde_json error raised while decoding.
    ///
    /// Syntax and EOF errors become [`Malformed`](Self::Malformed).
    /// Variant failures (no case key, unknown case) come back exactly as
    /// the variant visitor raised them, label included. serde's own
    /// "missing field" errors become
    /// [`MissingRequiredField`](Self::MissingRequiredField) and
    /// everything else is a [`TypeMismatch`](Self::TypeMismatch).
    pub fn from_decode(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() || err.is_io() {
            return Self::Malformed(err);
        }

        let message = err.to_string();
        if let Some(fault) = take_parked(&message) {
            return fault;
        }

        // Field names are Rust identifiers, so the first quoted segment
        // is the whole name.
        if message.starts_with(SERDE_MISSING_FIELD) {
            if let Some(field) = backtick_quoted(&message).first() {
                return Self::MissingRequiredField {
                    field: (*field).to_owned(),
                };
            }
        }

        Self::TypeMismatch(message)
    }

    /// Classifies a serde_json error raised while encoding.
    pub fn from_encode(err: serde_json::Error) -> Self {
        match take_parked(&err.to_string()) {
            Some(fault @ Self::InvalidVariantState { .. }) => fault,
            _ => Self::Encode(err),
        }
    }
}

/// Returns the segments of `message` wrapped in backticks, in order.
fn backtick_quoted(message: &str) -> Vec<&str> {
    message.split('`').skip(1).step_by(2).collect()
}
