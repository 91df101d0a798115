use super::enums::{EmailAddressType, PhoneNumberType, UrlType};
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddress {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_address_type: Field<EnumValue<EmailAddressType>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for EmailAddress {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "EmailAddress",
            fields: &[
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("value", FieldType::String),
                FieldSchema::optional(
                    "email_address_type",
                    FieldType::Enum(EmailAddressType::NAME),
                ),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_number_type: Field<EnumValue<PhoneNumberType>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for PhoneNumber {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "PhoneNumber",
            fields: &[
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("value", FieldType::String),
                FieldSchema::optional("phone_number_type", FieldType::Enum(PhoneNumberType::NAME)),
            ],
        };
        &SCHEMA
    }
}

/// A link attached to a candidate or job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Url {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub url_type: Field<EnumValue<UrlType>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Url {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Url",
            fields: &[
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("value", FieldType::String),
                FieldSchema::optional("url_type", FieldType::Enum(UrlType::NAME)),
            ],
        };
        &SCHEMA
    }
}
