use super::{Application, Attachment, EmailAddress, PhoneNumber, Url};
use crate::models::RemoteData;
use crate::wire::{Field, FieldSchema, FieldType, IdOr, OneOf, Record, RecordSchema, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A person applying to, or being sourced for, one or more jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub modified_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_updated_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_interaction_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_private: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub can_email: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub locations: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_numbers: Field<Vec<PhoneNumber>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_addresses: Field<Vec<EmailAddress>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub urls: Field<Vec<Url>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub applications: Field<Vec<IdOr<Application>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attachments: Field<Vec<IdOr<Attachment>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Candidate {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Candidate",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("first_name", FieldType::String),
                FieldSchema::optional("last_name", FieldType::String),
                FieldSchema::optional("company", FieldType::String),
                FieldSchema::optional("title", FieldType::String),
                FieldSchema::optional("remote_created_at", FieldType::Timestamp),
                FieldSchema::optional("remote_updated_at", FieldType::Timestamp),
                FieldSchema::optional("last_interaction_at", FieldType::Timestamp),
                FieldSchema::optional("is_private", FieldType::Boolean),
                FieldSchema::optional("can_email", FieldType::Boolean),
                FieldSchema::optional("locations", FieldType::List(&FieldType::String)),
                FieldSchema::optional(
                    "phone_numbers",
                    FieldType::List(&FieldType::Record(PhoneNumber::schema)),
                ),
                FieldSchema::optional(
                    "email_addresses",
                    FieldType::List(&FieldType::Record(EmailAddress::schema)),
                ),
                FieldSchema::optional("urls", FieldType::List(&FieldType::Record(Url::schema))),
                FieldSchema::optional("tags", FieldType::List(&FieldType::String)),
                FieldSchema::optional(
                    "applications",
                    FieldType::List(&FieldType::IdOr(Application::schema)),
                ),
                FieldSchema::optional(
                    "attachments",
                    FieldType::List(&FieldType::IdOr(Attachment::schema)),
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub first_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub company: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub last_interaction_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub is_private: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub can_email: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub locations: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub phone_numbers: Field<Vec<PhoneNumber>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub email_addresses: Field<Vec<EmailAddress>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub urls: Field<Vec<Url>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub tags: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub applications: Field<Vec<IdOr<Application>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub attachments: Field<Vec<IdOr<Attachment>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for CandidateRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "CandidateRequest",
            fields: &[
                FieldSchema::optional("first_name", FieldType::String),
                FieldSchema::optional("last_name", FieldType::String),
                FieldSchema::optional("company", FieldType::String),
                FieldSchema::optional("title", FieldType::String),
                FieldSchema::optional("last_interaction_at", FieldType::Timestamp),
                FieldSchema::optional("is_private", FieldType::Boolean),
                FieldSchema::optional("can_email", FieldType::Boolean),
                FieldSchema::optional("locations", FieldType::List(&FieldType::String)),
                FieldSchema::optional(
                    "phone_numbers",
                    FieldType::List(&FieldType::Record(PhoneNumber::schema)),
                ),
                FieldSchema::optional(
                    "email_addresses",
                    FieldType::List(&FieldType::Record(EmailAddress::schema)),
                ),
                FieldSchema::optional("urls", FieldType::List(&FieldType::Record(Url::schema))),
                FieldSchema::optional("tags", FieldType::List(&FieldType::String)),
                FieldSchema::optional(
                    "applications",
                    FieldType::List(&FieldType::IdOr(Application::schema)),
                ),
                FieldSchema::optional(
                    "attachments",
                    FieldType::List(&FieldType::IdOr(Attachment::schema)),
                ),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}

impl Candidate {
    /// Identifiers of linked applications, whether or not they were expanded.
    pub fn application_ids(&self) -> Vec<&str> {
        self.applications
            .value()
            .into_iter()
            .flatten()
            .filter_map(|application| match application {
                OneOf::First(id) => Some(id.as_str()),
                OneOf::Second(expanded) => expanded.id.value().map(String::as_str),
                OneOf::Unresolved(_) => None,
            })
            .collect()
    }
}
