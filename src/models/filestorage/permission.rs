use super::enums::{PermissionRole, PermissionType};
use super::{Group, User};
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Access granted on a file, folder or drive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub user: Field<IdOr<User>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub group: Field<IdOr<Group>>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub permission_type: Field<EnumValue<PermissionType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub roles: Field<Vec<EnumValue<PermissionRole>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Permission {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Permission",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("user", FieldType::IdOr(User::schema)),
                FieldSchema::optional("group", FieldType::IdOr(Group::schema)),
                FieldSchema::optional("type", FieldType::Enum(PermissionType::NAME)),
                FieldSchema::optional(
                    "roles",
                    FieldType::List(&FieldType::Enum(PermissionRole::NAME)),
                ),
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
    use super::Permission;
    use crate::models::filestorage::{PermissionRole, PermissionType};
    use crate::wire::{EnumValue, Field, Record};
    use serde_json::json;

    #[test]
    fn roles_keep_unknown_values() {
        let permission = Permission::from_value(json!({
            "type": "COMPANY",
            "roles": ["OWNER", "COMMENTER"]
        }))
        .expect("parse");
        assert_eq!(
            permission.permission_type,
            Field::Value(EnumValue::Known(PermissionType::Company))
        );
        assert_eq!(
            permission.roles,
            Field::Value(vec![
                EnumValue::Known(PermissionRole::Owner),
                EnumValue::Unknown("COMMENTER".to_string()),
            ])
        );
        assert_eq!(
            permission.to_value().expect("serialize"),
            json!({"type": "COMPANY", "roles": ["OWNER", "COMMENTER"]})
        );
    }
}
