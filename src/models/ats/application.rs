use super::{Candidate, Job, JobInterviewStage, Offer, RemoteUser};
use crate::models::RemoteData;
use crate::wire::{Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A candidate's application to a single job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
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
    pub job: Field<IdOr<Job>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub applied_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub rejected_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offers: Field<Vec<IdOr<Offer>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub credited_to: Field<IdOr<RemoteUser>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub current_stage: Field<IdOr<JobInterviewStage>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reject_reason: Field<IdOr<RejectReason>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Application {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Application",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("candidate", FieldType::IdOr(Candidate::schema)),
                FieldSchema::optional("job", FieldType::IdOr(Job::schema)),
                FieldSchema::optional("applied_at", FieldType::Timestamp),
                FieldSchema::optional("rejected_at", FieldType::Timestamp),
                FieldSchema::optional("offers", FieldType::List(&FieldType::IdOr(Offer::schema))),
                FieldSchema::optional("source", FieldType::String),
                FieldSchema::optional("credited_to", FieldType::IdOr(RemoteUser::schema)),
                FieldSchema::optional("current_stage", FieldType::IdOr(JobInterviewStage::schema)),
                FieldSchema::optional("reject_reason", FieldType::IdOr(RejectReason::schema)),
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
pub struct ApplicationRequest {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub candidate: Field<IdOr<Candidate>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub job: Field<IdOr<Job>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub applied_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub rejected_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offers: Field<Vec<IdOr<Offer>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub credited_to: Field<IdOr<RemoteUser>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub current_stage: Field<IdOr<JobInterviewStage>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub reject_reason: Field<IdOr<RejectReason>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_template_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub integration_params: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub linked_account_params: Field<Map<String, Value>>,
}

impl Record for ApplicationRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "ApplicationRequest",
            fields: &[
                FieldSchema::optional("candidate", FieldType::IdOr(Candidate::schema)),
                FieldSchema::optional("job", FieldType::IdOr(Job::schema)),
                FieldSchema::optional("applied_at", FieldType::Timestamp),
                FieldSchema::optional("rejected_at", FieldType::Timestamp),
                FieldSchema::optional("offers", FieldType::List(&FieldType::IdOr(Offer::schema))),
                FieldSchema::optional("source", FieldType::String),
                FieldSchema::optional("credited_to", FieldType::IdOr(RemoteUser::schema)),
                FieldSchema::optional("current_stage", FieldType::IdOr(JobInterviewStage::schema)),
                FieldSchema::optional("reject_reason", FieldType::IdOr(RejectReason::schema)),
                FieldSchema::optional("remote_template_id", FieldType::String),
                FieldSchema::optional("integration_params", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("linked_account_params", FieldType::Map(&FieldType::Any)),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectReason {
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
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for RejectReason {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "RejectReason",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
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
