use super::enums::OfferStatus;
use super::{Application, RemoteUser};
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub application: Field<IdOr<Application>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub creator: Field<IdOr<RemoteUser>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub closed_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub sent_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub start_date: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<EnumValue<OfferStatus>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Offer {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Offer",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("application", FieldType::IdOr(Application::schema)),
                FieldSchema::optional("creator", FieldType::IdOr(RemoteUser::schema)),
                FieldSchema::optional("closed_at", FieldType::Timestamp),
                FieldSchema::optional("sent_at", FieldType::Timestamp),
                FieldSchema::optional("start_date", FieldType::Timestamp),
                FieldSchema::optional("status", FieldType::Enum(OfferStatus::NAME)),
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
