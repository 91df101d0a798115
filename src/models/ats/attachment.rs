use super::enums::AttachmentType;
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attachment_type: Field<EnumValue<AttachmentType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Attachment {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Attachment",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("file_name", FieldType::String),
                FieldSchema::optional("file_url", FieldType::String),
                FieldSchema::optional("candidate", FieldType::String),
                FieldSchema::optional("attachment_type", FieldType::Enum(AttachmentType::NAME)),
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
pub struct AttachmentRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attachment_type: Field<EnumValue<AttachmentType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for AttachmentRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "AttachmentRequest",
            fields: &[
                FieldSchema::optional("file_name", FieldType::String),
                FieldSchema::optional("file_url", FieldType::String),
                FieldSchema::optional("candidate", FieldType::String),
                FieldSchema::optional("attachment_type", FieldType::Enum(AttachmentType::NAME)),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}
