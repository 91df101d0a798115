use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// An optional record field that remembers whether it was ever set.
///
/// `Unset` fields are left out of the serialized object entirely, while
/// `Null` is written as an explicit JSON `null`. Record structs pair this
/// type with `#[serde(default, skip_serializing_if = "Field::is_unset")]`.
///
/// A present value that does not parse as `T` is kept verbatim in
/// `Malformed` instead of failing the enclosing record, and serializes
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Unset,
    Null,
    Value(T),
    Malformed(Value),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    pub const fn null() -> Self {
        Field::Null
    }

    /// Maps `None` to an explicit null.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Value(value),
            None => Field::Null,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// True when the caller supplied the field, including an explicit null.
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Field::Malformed(_))
    }

    /// The raw JSON of a value that did not parse.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Field::Malformed(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(value) => Field::Value(value),
            Field::Malformed(raw) => Field::Malformed(raw.clone()),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(value) => Field::Value(f(value)),
            Field::Malformed(raw) => Field::Malformed(raw),
        }
    }

    /// Collapses unset, null and malformed into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => serializer.serialize_some(value),
            Field::Malformed(raw) => raw.serialize(serializer),
            Field::Unset | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        if raw.is_null() {
            return Ok(Field::Null);
        }
        match T::deserialize(&raw) {
            Ok(value) => Ok(Field::Value(value)),
            Err(err) => {
                log::debug!("optional field kept raw after parse failure: {err}");
                Ok(Field::Malformed(raw))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Field;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Probe {
        name: String,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        note: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        tags: Field<Vec<String>>,
    }

    #[test]
    fn unset_fields_are_omitted() {
        let probe = Probe {
            name: "a".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&probe).expect("serialize");
        assert_eq!(value, json!({"name": "a"}));
    }

    #[test]
    fn explicit_null_is_emitted() {
        let probe = Probe {
            name: "a".to_string(),
            note: Field::null(),
            ..Default::default()
        };
        let value = serde_json::to_value(&probe).expect("serialize");
        assert_eq!(value, json!({"name": "a", "note": null}));
    }

    #[test]
    fn absent_null_and_value_stay_distinct_after_parsing() {
        let absent: Probe = serde_json::from_value(json!({"name": "a"})).expect("absent");
        assert!(absent.note.is_unset());

        let null: Probe =
            serde_json::from_value(json!({"name": "a", "note": null, "tags": null})).expect("null");
        assert!(null.note.is_null());
        assert!(null.tags.is_null());

        let empty: Probe = serde_json::from_value(json!({"name": "a", "tags": []})).expect("empty");
        assert_eq!(empty.tags, Field::Value(Vec::new()));
        assert_ne!(null.tags, empty.tags);
    }

    #[test]
    fn unparseable_value_is_kept_raw() {
        let parsed: Probe =
            serde_json::from_value(json!({"name": "a", "note": 7, "tags": ["x", 1]}))
                .expect("parent still parses");
        assert_eq!(parsed.note, Field::Malformed(json!(7)));
        assert_eq!(parsed.note.value(), None);
        assert_eq!(parsed.tags.raw(), Some(&json!(["x", 1])));

        let value = serde_json::to_value(&parsed).expect("serialize");
        assert_eq!(value, json!({"name": "a", "note": 7, "tags": ["x", 1]}));
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        assert_eq!(Field::<i32>::from_option(None), Field::Null);
        assert_eq!(Field::from_option(Some(3)), Field::Value(3));
        assert_eq!(Field::from(3_i32).into_option(), Some(3));
        assert_eq!(Field::<i32>::Unset.into_option(), None);
    }
}
