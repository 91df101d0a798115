use super::enums::{DisabilityStatus, Gender, Race, VeteranStatus};
use super::Candidate;
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Equal employment opportunity survey answers for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Eeoc {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<IdOr<Candidate>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub submitted_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub race: Field<EnumValue<Race>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub gender: Field<EnumValue<Gender>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub veteran_status: Field<EnumValue<VeteranStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disability_status: Field<EnumValue<DisabilityStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Eeoc {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Eeoc",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("candidate", FieldType::IdOr(Candidate::schema)),
                FieldSchema::optional("submitted_at", FieldType::Timestamp),
                FieldSchema::optional("race", FieldType::Enum(Race::NAME)),
                FieldSchema::optional("gender", FieldType::Enum(Gender::NAME)),
                FieldSchema::optional("veteran_status", FieldType::Enum(VeteranStatus::NAME)),
                FieldSchema::optional("disability_status", FieldType::Enum(DisabilityStatus::NAME)),
                FieldSchema::optional("remote_was_deleted", FieldType::Boolean),
                FieldSchema::optional("field_mappings", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional(
                    "remote_data",
                    FieldType::List(&FieldType::Record(RemoteData::schema)),
                ),
            ],
        };
        &SCHEMA
    }
}

#[cfg(test)]
mod tests {
    use super::Eeoc;
    use crate::error::Problem;
    use crate::models::ats::{DisabilityStatus, Gender};
    use crate::wire::{EnumValue, Field, Record};
    use serde_json::json;

    #[test]
    fn parses_survey_answers() {
        let eeoc = Eeoc::from_json(
            r#"{
                "candidate": "f963f34d",
                "submitted_at": "2021-10-15T00:00:00Z",
                "race": "AMERICAN_INDIAN_OR_ALASKAN_NATIVE",
                "gender": "NON-BINARY",
                "veteran_status": null,
                "disability_status": "I_DONT_WISH_TO_ANSWER"
            }"#,
        )
        .expect("parse");
        assert_eq!(eeoc.gender, Field::Value(EnumValue::Known(Gender::NonBinary)));
        assert_eq!(
            eeoc.disability_status.value().and_then(EnumValue::known),
            Some(DisabilityStatus::IDontWishToAnswer)
        );
        assert!(eeoc.veteran_status.is_null());
    }

    #[test]
    fn non_string_enum_is_a_type_mismatch() {
        let err = Eeoc::validate_raw(&json!({"gender": 3})).expect_err("invalid");
        assert_eq!(err.field, "gender");
        assert_eq!(
            err.problem,
            Problem::TypeMismatch {
                expected: "Gender".to_string(),
                found: "number",
            }
        );
    }
}
