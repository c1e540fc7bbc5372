//! The closed sum-type contract shared by every variant family.
//!
//! A variant family is a Rust enum whose cases each wrap one payload
//! record. On the wire every value is a JSON object with exactly one key,
//! the case label, mapping to the payload:
//!
//! ```text
//! Command::Surrender(CommandSurrender {})   ⇄   {"Surrender":{}}
//! Target::Multi(TargetMulti { .. })         ⇄   {"Multi":{"xy_begin":..,"xy_end":..}}
//! ```
//!
//! Families are declared once with [`protocol_variant!`]. The macro emits
//! the enum, its [`Variant`] impl (family name and ordered case labels),
//! and the serde impls, all from the same list of cases. There is no
//! other place where case labels are written down.
//!
//! The enums cannot exist without a case. Callers that need to build a
//! value in two steps (declare now, fill later) use [`VariantCell`], which
//! models the transient uninitialized state explicitly and refuses to be
//! encoded, inspected, or copied until it holds a case.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{raise_de, raise_ser};
use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Variant trait
// ---------------------------------------------------------------------------

/// A closed family of cases, each carrying a fixed-shape payload.
///
/// Implemented only through [`protocol_variant!`]; the set of families is
/// fixed at compile time and listed in [`CATALOG`](crate::CATALOG).
pub trait Variant: Sized {
    /// Family name, e.g. `"Command"`.
    const FAMILY: &'static str;

    /// Case labels in declaration order. Index `i` is the label of the
    /// `i`-th enum case.
    const CASES: &'static [&'static str];

    /// Position of this value's case in [`CASES`](Self::CASES).
    fn case_index(&self) -> usize;

    /// Wire label of this value's case.
    fn case(&self) -> &'static str {
        Self::CASES[self.case_index()]
    }

    /// Encodes only the payload record, without the case wrapper.
    ///
    /// The tree is built the same way as [`to_value`](crate::to_value),
    /// so its numbers print exactly as they do in the byte encoding.
    fn payload_to_value(&self) -> Result<Value, ProtocolError>;

    /// Decodes the payload for `case`.
    #[doc(hidden)]
    fn decode_case<E: de::Error>(case: &str, payload: Value) -> Result<Self, E>;
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// serde visitor shared by every family.
///
/// The case label is the smallest key of the object in byte order, which
/// is the key the game host itself acts on when an object carries more
/// than one. Payloads under the other keys must be valid JSON but are
/// never decoded. A repeated key keeps its last value.
#[doc(hidden)]
pub struct VariantVisitor<V>(PhantomData<V>);

impl<V> VariantVisitor<V> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V> Default for VariantVisitor<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de, V: Variant> Visitor<'de> for VariantVisitor<V> {
    type Value = V;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a single-key `{}` object", V::FAMILY)
    }

    fn visit_map<A>(self, mut map: A) -> Result<V, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, payload)) = map.next_entry::<String, Value>()? {
            entries.insert(key, payload);
        }

        let Some((case, payload)) = entries.pop_first() else {
            return Err(raise_de(ProtocolError::MissingVariantCase {
                family: V::FAMILY.to_owned(),
            }));
        };

        V::decode_case(&case, payload)
    }
}

/// Builds the error for a case label that is not part of `V`'s family.
#[doc(hidden)]
pub fn unknown_case<V: Variant, E: de::Error>(case: &str) -> E {
    raise_de(ProtocolError::UnknownVariantCase {
        family: V::FAMILY.to_owned(),
        case: case.to_owned(),
    })
}

// ---------------------------------------------------------------------------
// Declaration macro
// ---------------------------------------------------------------------------

/// Declares a variant family.
///
/// ```ignore
/// protocol_variant! {
///     pub enum SingleTarget {
///         SingleEntity(SingleTargetSingleEntity),
///         Location(SingleTargetLocation),
///     }
/// }
/// ```
///
/// The enum name becomes the family name and each case identifier
/// becomes its wire label verbatim. Every payload type must be distinct
/// within the family (a `From<Payload>` impl is generated per case).
macro_rules! protocol_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$case_meta:meta])*
                $case:ident($payload:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$case_meta])*
                $case($payload),
            )+
        }

        impl $crate::Variant for $name {
            const FAMILY: &'static str = stringify!($name);
            const CASES: &'static [&'static str] = &[$(stringify!($case)),+];

            fn case_index(&self) -> usize {
                #[allow(clippy::upper_case_acronyms)]
                enum Index {
                    $($case),+
                }
                match self {
                    $(Self::$case(_) => Index::$case as usize,)+
                }
            }

            fn payload_to_value(
                &self,
            ) -> ::std::result::Result<::serde_json::Value, $crate::ProtocolError> {
                match self {
                    $(Self::$case(payload) => $crate::to_value(payload),)+
                }
            }

            fn decode_case<E: ::serde::de::Error>(
                case: &str,
                payload: ::serde_json::Value,
            ) -> ::std::result::Result<Self, E> {
                match case {
                    $(
                        stringify!($case) => ::serde_json::from_value(payload)
                            .map(Self::$case)
                            .map_err(E::custom),
                    )+
                    other => Err($crate::variant::unknown_case::<Self, E>(other)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                let index = <Self as $crate::Variant>::case_index(self);
                let case = <Self as $crate::Variant>::CASES[index];
                match self {
                    $(
                        Self::$case(payload) => serializer.serialize_newtype_variant(
                            <Self as $crate::Variant>::FAMILY,
                            index as u32,
                            case,
                            payload,
                        ),
                    )+
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_map($crate::variant::VariantVisitor::<Self>::new())
            }
        }

        $(
            impl From<$payload> for $name {
                fn from(payload: $payload) -> Self {
                    Self::$case(payload)
                }
            }
        )+
    };
}

pub(crate) use protocol_variant;

// ---------------------------------------------------------------------------
// VariantCell
// ---------------------------------------------------------------------------

/// A variant slot that may not have been filled yet.
///
/// `VariantCell::default()` is the uninitialized state. It becomes cased
/// exactly once, through [`new`](Self::new) or [`fill`](Self::fill), and
/// never goes back. Reading, cloning, or serializing an uninitialized cell
/// fails with [`ProtocolError::InvalidVariantState`].
///
/// Deserializing always produces a cased cell.
#[derive(Debug, PartialEq)]
pub struct VariantCell<V> {
    value: Option<V>,
}

impl<V: Variant> VariantCell<V> {
    /// Creates a cell already holding `value`.
    pub fn new(value: V) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty cell.
    pub fn uninitialized() -> Self {
        Self { value: None }
    }

    /// Returns `true` once a case has been set.
    pub fn is_cased(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the case of an uninitialized cell.
    ///
    /// A cell that is already cased is left untouched and `value` is
    /// handed back. To replace a cased value, assign a new cell.
    pub fn fill(&mut self, value: V) -> Result<(), V> {
        if self.value.is_some() {
            return Err(value);
        }
        self.value = Some(value);
        Ok(())
    }

    /// Borrows the cased value.
    pub fn get(&self) -> Result<&V, ProtocolError> {
        self.value.as_ref().ok_or_else(Self::invalid_state)
    }

    /// Returns the wire label of the held case.
    pub fn case(&self) -> Result<&'static str, ProtocolError> {
        self.get().map(Variant::case)
    }

    /// Copies the cell. Copying an uninitialized cell is an error.
    pub fn try_clone(&self) -> Result<Self, ProtocolError>
    where
        V: Clone,
    {
        self.get().map(|value| Self::new(value.clone()))
    }

    /// Unwraps the cased value.
    pub fn into_inner(self) -> Result<V, ProtocolError> {
        self.value.ok_or_else(Self::invalid_state)
    }

    fn invalid_state() -> ProtocolError {
        ProtocolError::InvalidVariantState {
            family: V::FAMILY.to_owned(),
        }
    }
}

impl<V: Variant> Default for VariantCell<V> {
    fn default() -> Self {
        Self::uninitialized()
    }
}

impl<V: Variant> From<V> for VariantCell<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: Variant + Serialize> Serialize for VariantCell<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.value {
            Some(value) => value.serialize(serializer),
            None => Err(raise_ser(Self::invalid_state())),
        }
    }
}

impl<'de, V: Variant + Deserialize<'de>> Deserialize<'de> for VariantCell<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Self::new)
    }
}
