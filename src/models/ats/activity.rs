use super::enums::{ActivityType, Visibility};
use super::RemoteUser;
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A note, email or other event logged against a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub user: Field<IdOr<RemoteUser>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub activity_type: Field<EnumValue<ActivityType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub subject: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub body: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub visibility: Field<EnumValue<Visibility>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Activity {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Activity",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("user", FieldType::IdOr(RemoteUser::schema)),
                FieldSchema::optional("remote_created_at", FieldType::Timestamp),
                FieldSchema::optional("activity_type", FieldType::Enum(ActivityType::NAME)),
                FieldSchema::optional("subject", FieldType::String),
                FieldSchema::optional("body", FieldType::String),
                FieldSchema::optional("visibility", FieldType::Enum(Visibility::NAME)),
                FieldSchema::optional("candidate", FieldType::String),
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub user: Field<IdOr<RemoteUser>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub activity_type: Field<EnumValue<ActivityType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub subject: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub body: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub visibility: Field<EnumValue<Visibility>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for ActivityRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "ActivityRequest",
            fields: &[
                FieldSchema::optional("user", FieldType::IdOr(RemoteUser::schema)),
                FieldSchema::optional("activity_type", FieldType::Enum(ActivityType::NAME)),
                FieldSchema::optional("subject", FieldType::String),
                FieldSchema::optional("body", FieldType::String),
                FieldSchema::optional("visibility", FieldType::Enum(Visibility::NAME)),
                FieldSchema::optional("candidate", FieldType::String),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}
