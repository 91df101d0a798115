use serde_json::{json, Map, Value};
use std::fmt::Debug;
use unified_api_rs::ats::{
    Activity, ActivityRequest, Application, ApplicationRequest, Attachment, AttachmentRequest,
    Candidate, CandidateRequest, Department, Eeoc, EmailAddress, Job, JobInterviewStage, Offer,
    Office, PhoneNumber, RejectReason, RemoteUser, Url,
};
use unified_api_rs::filestorage::{
    Drive, File, FileRequest, Folder, FolderRequest, Group, Permission, User,
};
use unified_api_rs::wire::{FieldType, RecordSchema};
use unified_api_rs::{
    DebugModeLog, DebugModelLogSummary, ErrorValidationProblem, IgnoreCommonModelRequest,
    LinkedAccountStatus, MetaResponse, ModelOperation, Record, RemoteData,
    ValidationProblemSource, WarningValidationProblem,
};

/// Builds a payload from a schema: every field when `full`, otherwise only
/// the required ones. Unions expand their record at the top level and fall
/// back to identifiers below it so recursive records terminate.
fn payload(schema: &RecordSchema, full: bool, depth: usize) -> Value {
    let mut object = Map::new();
    for field in schema.fields {
        if full || field.required {
            object.insert(
                field.name.to_string(),
                sample(&field.ty, field.name, full, depth),
            );
        }
    }
    Value::Object(object)
}

fn sample(ty: &FieldType, name: &str, full: bool, depth: usize) -> Value {
    match ty {
        FieldType::String => json!(format!("{name}-1")),
        FieldType::Integer => json!(7),
        FieldType::Float => json!(1.5),
        FieldType::Boolean => json!(true),
        FieldType::Timestamp => json!("2021-09-15T12:30:00Z"),
        FieldType::Enum(_) => json!("FUTURE_VALUE"),
        FieldType::Record(schema) => payload(schema(), full, depth + 1),
        FieldType::Union(candidates) => sample(&candidates[0], name, full, depth),
        FieldType::IdOr(schema) if depth == 0 => payload(schema(), full, depth + 1),
        FieldType::IdOr(_) => json!(format!("{name}-id")),
        FieldType::List(item) => json!([sample(item, name, full, depth)]),
        FieldType::Map(_) | FieldType::Any => json!({"key": {"nested": [1, "two"]}}),
    }
}

fn round_trips<R: Record + Debug + PartialEq>() {
    let schema = R::schema();
    for full in [true, false] {
        let raw = payload(schema, full, 0);
        R::validate_raw(&raw).unwrap_or_else(|err| panic!("{}: {err}", schema.name));

        let parsed = R::from_value(raw.clone())
            .unwrap_or_else(|err| panic!("{}: parse failed: {err}", schema.name));
        assert!(
            !format!("{parsed:?}").contains("Malformed"),
            "{}: a field did not parse as its declared type",
            schema.name
        );

        let emitted = parsed.to_value().expect("serialize");
        assert_eq!(emitted, raw, "{}: re-emitted payload differs", schema.name);

        let reparsed = R::from_value(emitted).expect("reparse");
        assert_eq!(reparsed, parsed, "{}: reparsed record differs", schema.name);
    }
}

#[test]
fn common_records_round_trip() {
    round_trips::<RemoteData>();
    round_trips::<ValidationProblemSource>();
    round_trips::<WarningValidationProblem>();
    round_trips::<ErrorValidationProblem>();
    round_trips::<DebugModelLogSummary>();
    round_trips::<DebugModeLog>();
    round_trips::<LinkedAccountStatus>();
    round_trips::<MetaResponse>();
    round_trips::<ModelOperation>();
    round_trips::<IgnoreCommonModelRequest>();
}

#[test]
fn ats_records_round_trip() {
    round_trips::<Candidate>();
    round_trips::<CandidateRequest>();
    round_trips::<Application>();
    round_trips::<ApplicationRequest>();
    round_trips::<RejectReason>();
    round_trips::<Activity>();
    round_trips::<ActivityRequest>();
    round_trips::<Attachment>();
    round_trips::<AttachmentRequest>();
    round_trips::<Offer>();
    round_trips::<Eeoc>();
    round_trips::<Job>();
    round_trips::<JobInterviewStage>();
    round_trips::<Department>();
    round_trips::<Office>();
    round_trips::<RemoteUser>();
    round_trips::<EmailAddress>();
    round_trips::<PhoneNumber>();
    round_trips::<Url>();
}

#[test]
fn filestorage_records_round_trip() {
    round_trips::<File>();
    round_trips::<FileRequest>();
    round_trips::<Folder>();
    round_trips::<FolderRequest>();
    round_trips::<Drive>();
    round_trips::<Permission>();
    round_trips::<User>();
    round_trips::<Group>();
}

#[test]
fn unset_fields_stay_absent_after_parsing() {
    let minimal = Candidate::from_value(json!({})).expect("parse");
    assert_eq!(minimal.to_value().expect("serialize"), json!({}));

    let folder = Folder::from_value(json!({"name": "Reports"})).expect("parse");
    assert_eq!(
        folder.to_value().expect("serialize"),
        json!({"name": "Reports"})
    );

    let log = DebugModeLog::from_value(payload(DebugModeLog::schema(), false, 0)).expect("parse");
    let emitted = log.to_value().expect("serialize");
    let keys: Vec<&str> = emitted
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["dashboard_view", "log_id", "log_summary"]);
}
