use super::enums::{JobStatus, JobType};
use super::{RemoteUser, Url};
use crate::models::RemoteData;
use crate::wire::{
    EnumValue, Field, FieldSchema, FieldType, IdOr, Record, RecordSchema, Timestamp, WireEnum,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
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
    pub description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<EnumValue<JobStatus>>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_unset")]
    pub job_type: Field<EnumValue<JobType>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub job_postings: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub job_posting_urls: Field<Vec<Url>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_created_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_updated_at: Field<Timestamp>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub confidential: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub departments: Field<Vec<IdOr<Department>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub offices: Field<Vec<IdOr<Office>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub hiring_managers: Field<Vec<IdOr<RemoteUser>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub recruiters: Field<Vec<IdOr<RemoteUser>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Job {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Job",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("description", FieldType::String),
                FieldSchema::optional("code", FieldType::String),
                FieldSchema::optional("status", FieldType::Enum(JobStatus::NAME)),
                FieldSchema::optional("type", FieldType::Enum(JobType::NAME)),
                FieldSchema::optional("job_postings", FieldType::List(&FieldType::String)),
                FieldSchema::optional(
                    "job_posting_urls",
                    FieldType::List(&FieldType::Record(Url::schema)),
                ),
                FieldSchema::optional("remote_created_at", FieldType::Timestamp),
                FieldSchema::optional("remote_updated_at", FieldType::Timestamp),
                FieldSchema::optional("confidential", FieldType::Boolean),
                FieldSchema::optional(
                    "departments",
                    FieldType::List(&FieldType::IdOr(Department::schema)),
                ),
                FieldSchema::optional("offices", FieldType::List(&FieldType::IdOr(Office::schema))),
                FieldSchema::optional(
                    "hiring_managers",
                    FieldType::List(&FieldType::IdOr(RemoteUser::schema)),
                ),
                FieldSchema::optional(
                    "recruiters",
                    FieldType::List(&FieldType::IdOr(RemoteUser::schema)),
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
pub struct JobInterviewStage {
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
    pub job: Field<IdOr<Job>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub stage_order: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for JobInterviewStage {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "JobInterviewStage",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("job", FieldType::IdOr(Job::schema)),
                FieldSchema::optional("stage_order", FieldType::Integer),
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
pub struct Department {
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

impl Record for Department {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Department",
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Office {
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
    pub location: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_was_deleted: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub field_mappings: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_data: Field<Vec<RemoteData>>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for Office {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Office",
            fields: &[
                FieldSchema::optional("id", FieldType::String),
                FieldSchema::optional("remote_id", FieldType::String),
                FieldSchema::optional("created_at", FieldType::Timestamp),
                FieldSchema::optional("modified_at", FieldType::Timestamp),
                FieldSchema::optional("name", FieldType::String),
                FieldSchema::optional("location", FieldType::String),
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
    use super::{Job, JobInterviewStage};
    use crate::models::ats::JobType;
    use crate::wire::{EnumValue, Field, OneOf, Record};
    use serde_json::json;

    #[test]
    fn type_field_uses_wire_name() {
        let job = Job {
            job_type: Field::Value(JobType::Posting.into()),
            ..Default::default()
        };
        assert_eq!(job.to_value().expect("serialize"), json!({"type": "POSTING"}));

        let parsed = Job::from_json(r#"{"type":"REQUISITION"}"#).expect("parse");
        assert_eq!(
            parsed.job_type,
            Field::Value(EnumValue::Known(JobType::Requisition))
        );
    }

    #[test]
    fn stage_can_embed_its_job() {
        let stage = JobInterviewStage::from_json(
            r#"{"name":"Phone screen","job":{"name":"Engineer","departments":["d1"]},"stage_order":2}"#,
        )
        .expect("parse");
        let job = stage.job.value().and_then(OneOf::expanded).expect("job");
        assert_eq!(job.departments, Field::Value(vec![OneOf::First("d1".to_string())]));
        assert_eq!(stage.stage_order, Field::Value(2));
    }
}
