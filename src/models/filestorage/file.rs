use super::{Drive, Folder, Permission};
use crate::models::RemoteData;
use crate::wire::{Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored file and its location in the folder tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_thumbnail_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mime_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub folder: Field<IdOr<Folder>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<IdOr<Permission>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub drive: Field<IdOr<Drive>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_updated_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for File {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "File",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("file_url", FieldType::String),
                FieldSchema::optional("file_thumbnail_url", FieldType::String),
                FieldSchema::optional("size", FieldType::Integer),
                FieldSchema::optional("mime_type", FieldType::String),
                FieldSchema::optional("description", FieldType::String),
                FieldSchema::optional("folder", FieldType::IdOr(Folder::schema)),
                FieldSchema::optional(
                    "permissions",
                    FieldType::List(&FieldType::IdOr(Permission::schema)),
                ),
                FieldSchema::optional("drive", FieldType::IdOr(Drive::schema)),
                FieldSchema::optional("remote_created_at", FieldType::Timestamp),
                FieldSchema::optional("remote_updated_at", FieldType::Timestamp),
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
pub struct FileRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub file_thumbnail_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub mime_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub folder: Field<IdOr<Folder>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<IdOr<Permission>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub drive: Field<IdOr<Drive>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for FileRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "FileRequest",
            fields: &[
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("file_url", FieldType::String),
                FieldSchema::optional("file_thumbnail_url", FieldType::String),
                FieldSchema::optional("size", FieldType::Integer),
                FieldSchema::optional("mime_type", FieldType::String),
                FieldSchema::optional("description", FieldType::String),
                FieldSchema::optional("folder", FieldType::IdOr(Folder::schema)),
                FieldSchema::optional(
                    "permissions",
                    FieldType::List(&FieldType::IdOr(Permission::schema)),
                ),
                FieldSchema::optional("drive", FieldType::IdOr(Drive::schema)),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}
