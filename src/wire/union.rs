use super::record::Record;
use super::schema::{json_kind, FieldType};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Outcome of matching a raw value against ordered union candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the first candidate that accepted the value.
    Matched(usize),
    Unresolved,
}

/// Returns the first candidate in declaration order that accepts `value`.
pub fn resolve_union(value: &Value, candidates: &[FieldType]) -> Resolution {
    candidates
        .iter()
        .position(|candidate| candidate.accepts(value))
        .map_or(Resolution::Unresolved, Resolution::Matched)
}

/// A type that can stand as one candidate of an untagged union.
pub trait Shape: Sized {
    fn field_type() -> FieldType;

    /// Returns `Some` when `value` has this shape and passes its validation.
    fn try_shape(value: &Value) -> Option<Self>;
}

impl Shape for String {
    fn field_type() -> FieldType {
        FieldType::String
    }

    fn try_shape(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Shape for i64 {
    fn field_type() -> FieldType {
        FieldType::Integer
    }

    fn try_shape(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl Shape for f64 {
    fn field_type() -> FieldType {
        FieldType::Float
    }

    fn try_shape(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Shape for bool {
    fn field_type() -> FieldType {
        FieldType::Boolean
    }

    fn try_shape(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl<R: Record> Shape for R {
    fn field_type() -> FieldType {
        FieldType::Record(R::schema)
    }

    fn try_shape(value: &Value) -> Option<Self> {
        R::validate_raw(value).ok()?;
        serde_json::from_value(value.clone()).ok()
    }
}

/// An untagged two-way union resolved by trying `A` first, then `B`.
///
/// Values matching neither candidate are kept verbatim in `Unresolved`
/// and serialize back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOf<A, B> {
    First(A),
    Second(B),
    Unresolved(Value),
}

/// The common "identifier or expanded record" union.
pub type IdOr<T> = OneOf<String, T>;

impl<A: Shape, B: Shape> OneOf<A, B> {
    pub fn resolve(value: Value) -> Self {
        if let Some(first) = A::try_shape(&value) {
            return OneOf::First(first);
        }
        if let Some(second) = B::try_shape(&value) {
            return OneOf::Second(second);
        }
        log::debug!(
            "union value matched none of {} | {}; keeping raw {}",
            A::field_type().describe(),
            B::field_type().describe(),
            json_kind(&value)
        );
        OneOf::Unresolved(value)
    }
}

impl<A, B> OneOf<A, B> {
    /// Zero-based position of the matched candidate.
    pub fn matched_index(&self) -> Option<usize> {
        match self {
            OneOf::First(_) => Some(0),
            OneOf::Second(_) => Some(1),
            OneOf::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.matched_index().is_some()
    }

    pub fn first(&self) -> Option<&A> {
        match self {
            OneOf::First(value) => Some(value),
            _ => None,
        }
    }

    pub fn second(&self) -> Option<&B> {
        match self {
            OneOf::Second(value) => Some(value),
            _ => None,
        }
    }

    pub fn raw(&self) -> Option<&Value> {
        match self {
            OneOf::Unresolved(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> OneOf<String, T> {
    pub fn id(&self) -> Option<&str> {
        self.first().map(String::as_str)
    }

    pub fn expanded(&self) -> Option<&T> {
        self.second()
    }
}

impl<T> From<&str> for OneOf<String, T> {
    fn from(id: &str) -> Self {
        OneOf::First(id.to_string())
    }
}

impl<A: Serialize, B: Serialize> Serialize for OneOf<A, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OneOf::First(value) => value.serialize(serializer),
            OneOf::Second(value) => value.serialize(serializer),
            OneOf::Unresolved(value) => value.serialize(serializer),
        }
    }
}

impl<'de, A: Shape, B: Shape> Deserialize<'de> for OneOf<A, B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::resolve)
    }
}
