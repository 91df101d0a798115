use super::schema::RecordSchema;
use crate::error::{Error, ValidationError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A typed API record with a declared field schema.
///
/// Serialization and deserialization come from serde; the schema drives
/// `validate_raw` and union candidate matching.
pub trait Record: Serialize + DeserializeOwned {
    fn schema() -> &'static RecordSchema;

    fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_value(value: Value) -> Result<Self, Error> {
        Ok(serde_json::from_value(value)?)
    }

    fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    /// Structurally checks a raw JSON value against this record's schema.
    fn validate_raw(value: &Value) -> Result<(), ValidationError> {
        Self::schema().validate(value)
    }

    /// Checks an already constructed record through its serialized form.
    fn validate(&self) -> Result<(), Error> {
        let value = self.to_value()?;
        Self::validate_raw(&value)?;
        Ok(())
    }
}

impl<R: Record> Record for Box<R> {
    fn schema() -> &'static RecordSchema {
        R::schema()
    }
}
