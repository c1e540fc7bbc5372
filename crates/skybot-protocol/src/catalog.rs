//! Runtime view of the variant families.
//!
//! [`CATALOG`] lists every family with its ordered case labels, read
//! straight from the [`Variant`] impls. [`RawVariant`] is the untyped
//! form of a variant value (family, case label, payload JSON) for callers
//! that route on labels without knowing the Rust type up front.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::codec::from_value;
use crate::{
    AbilityEffectSpecific, AreaShape, Aspect, Command, CommandRejectionReason, Job,
    MountState, ProtocolError, SingleTarget, Target, Variant,
};

/// Name and case labels of one variant family.
///
/// A schema is a view of a [`Variant`] impl, never written by hand:
///
/// ```rust
/// use skybot_protocol::{FamilySchema, Target};
///
/// let schema = FamilySchema::of::<Target>();
/// assert_eq!(schema.family, "Target");
/// assert_eq!(schema.cases, &["Single", "Multi"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySchema {
    /// Family name, the Rust enum name.
    pub family: &'static str,
    /// Case labels in declaration order.
    pub cases: &'static [&'static str],
}

impl FamilySchema {
    /// Reads the schema of family `V`. Usable in `const` context, which is
    /// how [`CATALOG`] is built.
    pub const fn of<V: Variant>() -> Self {
        Self {
            family: V::FAMILY,
            cases: V::CASES,
        }
    }

    /// Position of `case` in declaration order.
    pub fn case_index(&self, case: &str) -> Option<usize> {
        self.cases.iter().position(|c| *c == case)
    }

    /// Returns `true` if `case` is one of this family's labels. Labels are
    /// case sensitive.
    pub fn contains(&self, case: &str) -> bool {
        self.case_index(case).is_some()
    }
}

/// Every variant family of the protocol.
pub const CATALOG: &[FamilySchema] = &[
    FamilySchema::of::<SingleTarget>(),
    FamilySchema::of::<Target>(),
    FamilySchema::of::<AreaShape>(),
    FamilySchema::of::<AbilityEffectSpecific>(),
    FamilySchema::of::<MountState>(),
    FamilySchema::of::<Aspect>(),
    FamilySchema::of::<Job>(),
    FamilySchema::of::<Command>(),
    FamilySchema::of::<CommandRejectionReason>(),
];

/// Looks up a family by name.
pub fn family(name: &str) -> Option<&'static FamilySchema> {
    CATALOG.iter().find(|schema| schema.family == name)
}

// ---------------------------------------------------------------------------
// RawVariant
// ---------------------------------------------------------------------------

/// A variant value held as family + case label + payload JSON.
///
/// Decoding follows the same rules as the typed codec: the smallest key
/// is the case, an empty object has no case, and the label must belong
/// to the family. The payload itself is kept as JSON and only checked
/// when converted into a typed value.
///
/// Encoding goes through [`to_bytes`](Self::to_bytes), which writes the
/// single-key wrapper itself instead of asking serde for it:
///
/// ```rust
/// use skybot_protocol::{Command, CommandSurrender, JsonCodec, Codec, RawVariant};
///
/// let cmd = Command::from(CommandSurrender {});
/// let raw = RawVariant::from_variant(&cmd).unwrap();
/// assert_eq!(raw.to_bytes().unwrap(), JsonCodec.encode(&cmd).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RawVariant {
    pub family: &'static str,
    pub case: &'static str,
    pub payload: Value,
}

impl RawVariant {
    /// Reads the case label and payload from a single-key object.
    pub fn decode(json: &Value, schema: &FamilySchema) -> Result<Self, ProtocolError> {
        let Value::Object(object) = json else {
            return Err(ProtocolError::TypeMismatch(format!(
                "expected a single-key `{}` object, found {}",
                schema.family,
                json_kind(json)
            )));
        };

        let Some((label, payload)) = object.iter().min_by(|a, b| a.0.cmp(b.0)) else {
            return Err(ProtocolError::MissingVariantCase {
                family: schema.family.to_owned(),
            });
        };

        let case = schema
            .case_index(label)
            .map(|index| schema.cases[index])
            .ok_or_else(|| ProtocolError::UnknownVariantCase {
                family: schema.family.to_owned(),
                case: label.clone(),
            })?;

        Ok(Self {
            family: schema.family,
            case,
            payload: payload.clone(),
        })
    }

    /// Splits a typed value into its raw parts.
    pub fn from_variant<V: Variant>(value: &V) -> Result<Self, ProtocolError> {
        let payload = value.payload_to_value()?;
        Ok(Self {
            family: V::FAMILY,
            case: value.case(),
            payload,
        })
    }

    /// Writes the wire bytes: `{`, the quoted label, `:`, the payload, `}`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut out = Vec::with_capacity(self.case.len() + 16);
        out.push(b'{');
        serde_json::to_writer(&mut out, self.case).map_err(ProtocolError::Encode)?;
        out.push(b':');
        serde_json::to_writer(&mut out, &self.payload).map_err(ProtocolError::Encode)?;
        out.push(b'}');
        Ok(out)
    }

    /// Reassembles the single-key wire object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::with_capacity(1);
        object.insert(self.case.to_owned(), self.payload.clone());
        Value::Object(object)
    }

    /// Converts into the typed family `V`, checking the payload shape.
    pub fn into_variant<V>(self) -> Result<V, ProtocolError>
    where
        V: Variant + DeserializeOwned,
    {
        if self.family != V::FAMILY {
            return Err(ProtocolError::TypeMismatch(format!(
                "`{}` value cannot become a `{}`",
                self.family,
                V::FAMILY
            )));
        }
        from_value(self.to_json())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
