use super::{Drive, Permission};
use crate::models::RemoteData;
use crate::wire::{Field, FieldSchema, FieldType, IdOr, OneOf, Record, RecordSchema, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A folder; `parent_folder` may itself be expanded into a full folder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Folder {
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
    pub folder_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parent_folder: Field<IdOr<Box<Folder>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub drive: Field<IdOr<Drive>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<IdOr<Permission>>>,
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

impl Record for Folder {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Folder",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("folder_url", FieldType::String),
                FieldSchema::optional("size", FieldType::Integer),
                FieldSchema::optional("description", FieldType::String),
                FieldSchema::optional("parent_folder", FieldType::IdOr(Folder::schema)),
                FieldSchema::optional("drive", FieldType::IdOr(Drive::schema)),
                FieldSchema::optional(
                    "permissions",
                    FieldType::List(&FieldType::IdOr(Permission::schema)),
                ),
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
pub struct FolderRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub folder_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub size: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub parent_folder: Field<IdOr<Folder>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub drive: Field<IdOr<Drive>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub permissions: Field<Vec<IdOr<Permission>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for FolderRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "FolderRequest",
            fields: &[
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("folder_url", FieldType::String),
                FieldSchema::optional("size", FieldType::Integer),
                FieldSchema::optional("description", FieldType::String),
                FieldSchema::optional("parent_folder", FieldType::IdOr(Folder::schema)),
                FieldSchema::optional("drive", FieldType::IdOr(Drive::schema)),
                FieldSchema::optional(
                    "permissions",
                    FieldType::List(&FieldType::IdOr(Permission::schema)),
                ),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}

impl Folder {
    /// Identifier of the parent folder, whether or not it was expanded.
    pub fn parent_id(&self) -> Option<&str> {
        match self.parent_folder.value()? {
            OneOf::First(id) => Some(id.as_str()),
            OneOf::Second(parent) => parent.id.value().map(String::as_str),
            OneOf::Unresolved(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Folder;
    use crate::error::Problem;
    use crate::wire::{OneOf, Record};
    use serde_json::json;

    #[test]
    fn parent_folders_nest_recursively() {
        let folder = Folder::from_value(json!({
            "id": "leaf",
            "parent_folder": {
                "id": "middle",
                "parent_folder": {"id": "top", "parent_folder": null}
            }
        }))
        .expect("parse");

        assert_eq!(folder.parent_id(), Some("middle"));
        let middle = folder.parent_folder.value().and_then(OneOf::expanded).expect("middle");
        assert_eq!(middle.parent_id(), Some("top"));
        let top = middle.parent_folder.value().and_then(OneOf::expanded).expect("top");
        assert!(top.parent_folder.is_null());
        assert_eq!(top.parent_id(), None);
    }

    #[test]
    fn malformed_nested_parent_leaves_union_unresolved() {
        let err = Folder::validate_raw(&json!({
            "parent_folder": {"parent_folder": {"size": true}}
        }))
        .expect_err("invalid");
        assert_eq!(err.record, "Folder");
        assert_eq!(err.field, "parent_folder");
        assert!(matches!(err.problem, Problem::NoMatchingCandidate { .. }));
    }

    #[test]
    fn unset_parent_is_omitted() {
        let folder = Folder {
            name: "Reports".to_string().into(),
            ..Default::default()
        };
        assert!(folder.parent_folder.is_unset());
        assert_eq!(folder.to_value().expect("serialize"), json!({"name": "Reports"}));
    }
}
