use crate::wire::{
    wire_enum, EnumValue, Field, FieldSchema, FieldType, Record, RecordSchema, WireEnum,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

wire_enum! {
    pub enum IgnoreReason {
        GeneralCustomerRequest => "GENERAL_CUSTOMER_REQUEST",
        Gdpr => "GDPR",
        Other => "OTHER",
    }
}

/// Raw third-party payload attached to a record when `include_remote_data` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteData {
    pub path: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub data: Field<Value>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for RemoteData {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "RemoteData",
            fields: &[
                FieldSchema::required("path", FieldType::String),
                FieldSchema::optional("data", FieldType::Any),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationProblemSource {
    pub pointer: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for ValidationProblemSource {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "ValidationProblemSource",
            fields: &[FieldSchema::required("pointer", FieldType::String)],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarningValidationProblem {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<ValidationProblemSource>,
    pub title: String,
    pub detail: String,
    pub problem_type: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl WarningValidationProblem {
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        problem_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            problem_type: problem_type.into(),
            ..Default::default()
        }
    }
}

impl Record for WarningValidationProblem {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "WarningValidationProblem",
            fields: &[
                FieldSchema::optional("source", FieldType::Record(ValidationProblemSource::schema)),
                FieldSchema::required("title", FieldType::String),
                FieldSchema::required("detail", FieldType::String),
                FieldSchema::required("problem_type", FieldType::String),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorValidationProblem {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub source: Field<ValidationProblemSource>,
    pub title: String,
    pub detail: String,
    pub problem_type: String,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl ErrorValidationProblem {
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        problem_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            problem_type: problem_type.into(),
            ..Default::default()
        }
    }
}

impl Record for ErrorValidationProblem {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "ErrorValidationProblem",
            fields: &[
                FieldSchema::optional("source", FieldType::Record(ValidationProblemSource::schema)),
                FieldSchema::required("title", FieldType::String),
                FieldSchema::required("detail", FieldType::String),
                FieldSchema::required("problem_type", FieldType::String),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugModelLogSummary {
    pub url: String,
    pub method: String,
    pub status_code: i64,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for DebugModelLogSummary {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "DebugModelLogSummary",
            fields: &[
                FieldSchema::required("url", FieldType::String),
                FieldSchema::required("method", FieldType::String),
                FieldSchema::required("status_code", FieldType::Integer),
            ],
        };
        &SCHEMA
    }
}

/// Request log entry returned when `is_debug_mode` is enabled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebugModeLog {
    pub log_id: String,
    pub dashboard_view: String,
    pub log_summary: DebugModelLogSummary,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for DebugModeLog {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "DebugModeLog",
            fields: &[
                FieldSchema::required("log_id", FieldType::String),
                FieldSchema::required("dashboard_view", FieldType::String),
                FieldSchema::required(
                    "log_summary",
                    FieldType::Record(DebugModelLogSummary::schema),
                ),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccountStatus {
    pub linked_account_status: String,
    pub can_make_request: bool,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for LinkedAccountStatus {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "LinkedAccountStatus",
            fields: &[
                FieldSchema::required("linked_account_status", FieldType::String),
                FieldSchema::required("can_make_request", FieldType::Boolean),
            ],
        };
        &SCHEMA
    }
}

/// Describes the request body accepted by a create or update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    pub request_schema: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_field_classes: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub status: Field<LinkedAccountStatus>,
    pub has_conditional_params: bool,
    pub has_required_linked_account_params: bool,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for MetaResponse {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "MetaResponse",
            fields: &[
                FieldSchema::required("request_schema", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("remote_field_classes", FieldType::Map(&FieldType::Any)),
                FieldSchema::optional("status", FieldType::Record(LinkedAccountStatus::schema)),
                FieldSchema::required("has_conditional_params", FieldType::Boolean),
                FieldSchema::required("has_required_linked_account_params", FieldType::Boolean),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOperation {
    pub model_name: String,
    pub available_operations: Vec<String>,
    pub required_post_parameters: Vec<String>,
    pub supported_fields: Vec<String>,
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl Record for ModelOperation {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "ModelOperation",
            fields: &[
                FieldSchema::required("model_name", FieldType::String),
                FieldSchema::required("available_operations", FieldType::List(&FieldType::String)),
                FieldSchema::required(
                    "required_post_parameters",
                    FieldType::List(&FieldType::String),
                ),
                FieldSchema::required("supported_fields", FieldType::List(&FieldType::String)),
            ],
        };
        &SCHEMA
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IgnoreCommonModelRequest {
    pub reason: EnumValue<IgnoreReason>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub message: Field<String>,
}

impl IgnoreCommonModelRequest {
    pub fn new(reason: impl Into<EnumValue<IgnoreReason>>) -> Self {
        Self {
            reason: reason.into(),
            message: Field::Unset,
        }
    }
}

impl Record for IgnoreCommonModelRequest {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "IgnoreCommonModelRequest",
            fields: &[
                FieldSchema::required("reason", FieldType::Enum(IgnoreReason::NAME)),
                FieldSchema::optional("message", FieldType::String),
            ],
        };
        &SCHEMA
    }
}

/// One page of a cursor-paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Paginated<T> {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub previous: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub results: Field<Vec<T>>,
}

impl<T> Paginated<T> {
    /// Cursor for the following page, if the server returned one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next.value().map(String::as_str)
    }

    pub fn results(&self) -> &[T] {
        self.results.value().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Envelope returned by create and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse<T> {
    pub model: T,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub warnings: Field<Vec<WarningValidationProblem>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<ErrorValidationProblem>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub logs: Field<Vec<DebugModeLog>>,
}

impl<T> ModelResponse<T> {
    pub fn warnings(&self) -> &[WarningValidationProblem] {
        self.warnings.value().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn errors(&self) -> &[ErrorValidationProblem] {
        self.errors.value().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Body wrapper for create and update endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointRequest<T> {
    pub model: T,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remote_user_id: Field<String>,
}

impl<T> EndpointRequest<T> {
    pub fn new(model: T) -> Self {
        Self {
            model,
            remote_user_id: Field::Unset,
        }
    }

    pub fn remote_user_id(mut self, remote_user_id: impl Into<String>) -> Self {
        self.remote_user_id = Field::Value(remote_user_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn warning_without_source_omits_the_key() {
        let warning = WarningValidationProblem::new("Unsupported", "Field ignored", "UNSUPPORTED");
        let value = warning.to_value().expect("serialize");
        assert_eq!(
            value,
            json!({
                "title": "Unsupported",
                "detail": "Field ignored",
                "problem_type": "UNSUPPORTED"
            })
        );
    }

    #[test]
    fn warning_with_explicit_null_source_keeps_the_key() {
        let warning = WarningValidationProblem {
            source: Field::null(),
            ..WarningValidationProblem::new("t", "d", "p")
        };
        let value = warning.to_value().expect("serialize");
        assert_eq!(value["source"], Value::Null);
        assert!(value.as_object().expect("object").contains_key("source"));
    }

    #[test]
    fn null_nested_record_stays_null() {
        let parsed = ErrorValidationProblem::from_json(
            r#"{"source":null,"title":"t","detail":"d","problem_type":"p"}"#,
        )
        .expect("parse");
        assert!(parsed.source.is_null());
    }

    #[test]
    fn unknown_properties_are_retained() {
        let parsed = RemoteData::from_json(r#"{"path":"/people","data":{"id":1},"status":200}"#)
            .expect("parse");
        assert_eq!(parsed.additional_properties.get("status"), Some(&json!(200)));
        assert_eq!(parsed.data.value(), Some(&json!({"id": 1})));
    }

    #[test]
    fn malformed_required_nested_record_fails_the_parent() {
        let err = DebugModeLog::from_json(
            r#"{"log_id":"1","dashboard_view":"v","log_summary":{"url":"u"}}"#,
        )
        .expect_err("missing nested fields");
        assert!(matches!(err, crate::Error::Json(_)));
    }

    #[test]
    fn malformed_optional_nested_record_stays_local() {
        let parsed = ErrorValidationProblem::from_value(json!({
            "title": "t",
            "detail": "d",
            "problem_type": "p",
            "source": {"pointer": 5}
        }))
        .expect("parent parses");
        assert_eq!(parsed.title, "t");
        assert_eq!(parsed.source.raw(), Some(&json!({"pointer": 5})));
        let reemitted = parsed.to_value().expect("serialize");
        assert!(ErrorValidationProblem::validate_raw(&reemitted).is_err());
    }

    #[test]
    fn model_response_accepts_null_problem_lists() {
        let response: ModelResponse<RemoteData> = serde_json::from_value(json!({
            "model": {"path": "/people"},
            "warnings": null,
            "errors": null
        }))
        .expect("parse");
        assert!(response.warnings.is_null());
        assert!(response.errors.is_null());
        assert!(response.warnings().is_empty());
        assert!(response.logs.is_unset());

        let empty: ModelResponse<RemoteData> =
            serde_json::from_value(json!({"model": {"path": "/people"}, "warnings": []}))
                .expect("parse");
        assert_eq!(empty.warnings, Field::Value(Vec::new()));
        assert!(empty.errors.is_unset());
    }

    #[test]
    fn ignore_request_serializes_reason_wire_value() {
        let request = IgnoreCommonModelRequest::new(IgnoreReason::Gdpr);
        assert_eq!(request.to_value().expect("serialize"), json!({"reason": "GDPR"}));
    }

    #[test]
    fn paginated_results_distinguish_null_from_empty() {
        let null: Paginated<RemoteData> =
            serde_json::from_value(json!({"next": null, "results": null})).expect("null");
        assert!(null.results.is_null());
        assert!(null.results().is_empty());

        let empty: Paginated<RemoteData> =
            serde_json::from_value(json!({"next": "cD0y", "results": []})).expect("empty");
        assert_eq!(empty.results, Field::Value(Vec::new()));
        assert_eq!(empty.next_cursor(), Some("cD0y"));
        assert!(empty.previous.is_unset());
    }
}
