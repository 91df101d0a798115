use super::timestamp::Timestamp;
use super::union::{resolve_union, Resolution};
use crate::error::{Problem, ValidationError};
use serde_json::Value;

/// Declared semantic type of a record field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    /// Any string; unknown wire values are accepted. Carries the enum name.
    Enum(&'static str),
    Record(fn() -> &'static RecordSchema),
    /// Untagged union; candidates are tried in order.
    Union(&'static [FieldType]),
    /// Shorthand for a union of a plain string identifier, then the record.
    IdOr(fn() -> &'static RecordSchema),
    List(&'static FieldType),
    Map(&'static FieldType),
    Any,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub required: bool,
    pub ty: FieldType,
}

impl FieldSchema {
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            required: true,
            ty,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            required: false,
            ty,
        }
    }
}

/// Field layout of one record type, declared once as a `static`.
#[derive(Debug)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

struct Location {
    record: &'static str,
    field: &'static str,
    path: String,
}

impl Location {
    fn detached() -> Self {
        Self {
            record: "",
            field: "",
            path: String::new(),
        }
    }

    fn at(&self, path: String) -> Self {
        Self {
            record: self.record,
            field: self.field,
            path,
        }
    }

    fn fail(&self, problem: Problem) -> ValidationError {
        ValidationError {
            record: self.record,
            field: self.field.to_string(),
            path: self.path.clone(),
            problem,
        }
    }
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Checks a raw JSON value against the declared fields.
    ///
    /// Unknown keys are ignored. Optional fields may be absent or null;
    /// required fields must be present and non-null.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.validate_at(value, "")
    }

    fn validate_at(&self, value: &Value, prefix: &str) -> Result<(), ValidationError> {
        let Some(object) = value.as_object() else {
            return Err(ValidationError {
                record: self.name,
                field: String::new(),
                path: prefix.to_string(),
                problem: Problem::NotAnObject {
                    found: json_kind(value),
                },
            });
        };
        for field in self.fields {
            let location = Location {
                record: self.name,
                field: field.name,
                path: join_path(prefix, field.name),
            };
            match object.get(field.name) {
                None if field.required => return Err(location.fail(Problem::Missing)),
                Some(Value::Null) if field.required => return Err(location.fail(Problem::Null)),
                None | Some(Value::Null) => {}
                Some(raw) => field.ty.check(raw, &location)?,
            }
        }
        Ok(())
    }
}

impl FieldType {
    /// True when `value` structurally matches this type.
    pub fn accepts(&self, value: &Value) -> bool {
        self.check(value, &Location::detached()).is_ok()
    }

    pub fn describe(&self) -> String {
        match self {
            FieldType::String => "string".to_string(),
            FieldType::Integer => "integer".to_string(),
            FieldType::Float => "number".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Timestamp => "timestamp".to_string(),
            FieldType::Enum(name) => (*name).to_string(),
            FieldType::Record(schema) => schema().name.to_string(),
            FieldType::Union(candidates) => candidates
                .iter()
                .map(FieldType::describe)
                .collect::<Vec<_>>()
                .join(" | "),
            FieldType::IdOr(schema) => format!("string | {}", schema().name),
            FieldType::List(item) => format!("list<{}>", item.describe()),
            FieldType::Map(item) => format!("map<string, {}>", item.describe()),
            FieldType::Any => "any".to_string(),
        }
    }

    fn check(&self, value: &Value, location: &Location) -> Result<(), ValidationError> {
        let matches = match self {
            FieldType::String | FieldType::Enum(_) => value.is_string(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Float => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Timestamp => value
                .as_str()
                .is_some_and(|raw| raw.parse::<Timestamp>().is_ok()),
            FieldType::Any => true,
            FieldType::Record(schema) => return schema().validate_at(value, &location.path),
            FieldType::Union(candidates) => return self.check_union(value, candidates, location),
            FieldType::IdOr(schema) => {
                let candidates = [FieldType::String, FieldType::Record(*schema)];
                return self.check_union(value, &candidates, location);
            }
            FieldType::List(item) => {
                if let Some(items) = value.as_array() {
                    for (index, entry) in items.iter().enumerate() {
                        item.check(entry, &location.at(format!("{}[{index}]", location.path)))?;
                    }
                    return Ok(());
                }
                false
            }
            FieldType::Map(item) => {
                if let Some(entries) = value.as_object() {
                    for (key, entry) in entries {
                        item.check(entry, &location.at(join_path(&location.path, key)))?;
                    }
                    return Ok(());
                }
                false
            }
        };
        if matches {
            Ok(())
        } else {
            Err(location.fail(Problem::TypeMismatch {
                expected: self.describe(),
                found: json_kind(value),
            }))
        }
    }

    fn check_union(
        &self,
        value: &Value,
        candidates: &[FieldType],
        location: &Location,
    ) -> Result<(), ValidationError> {
        match resolve_union(value, candidates) {
            Resolution::Matched(_) => Ok(()),
            Resolution::Unresolved => Err(location.fail(Problem::NoMatchingCandidate {
                expected: self.describe(),
            })),
        }
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldSchema, FieldType, RecordSchema};
    use crate::error::Problem;
    use serde_json::json;

    fn source_schema() -> &'static RecordSchema {
        static SCHEMA: RecordSchema = RecordSchema {
            name: "Source",
            fields: &[FieldSchema::required("pointer", FieldType::String)],
        };
        &SCHEMA
    }

    static PROBLEM: RecordSchema = RecordSchema {
        name: "Problem",
        fields: &[
            FieldSchema::required("title", FieldType::String),
            FieldSchema::optional("count", FieldType::Integer),
            FieldSchema::optional("source", FieldType::Record(source_schema)),
            FieldSchema::optional(
                "owner",
                FieldType::Union(&[FieldType::String, FieldType::Record(source_schema)]),
            ),
            FieldSchema::optional("tags", FieldType::List(&FieldType::String)),
            FieldSchema::optional("at", FieldType::Timestamp),
            FieldSchema::optional("extra", FieldType::Map(&FieldType::Any)),
        ],
    };

    #[test]
    fn accepts_well_formed_object_with_unknown_keys() {
        let value = json!({
            "title": "t",
            "count": 3,
            "source": {"pointer": "/a"},
            "owner": "user-1",
            "tags": ["x"],
            "at": "2021-01-01T00:00:00Z",
            "extra": {"anything": [1, 2]},
            "unexpected": true
        });
        PROBLEM.validate(&value).expect("valid");
    }

    #[test]
    fn optional_null_always_passes() {
        let value = json!({"title": "t", "count": null, "source": null, "tags": null});
        PROBLEM.validate(&value).expect("valid");
    }

    #[test]
    fn required_field_missing_or_null_fails() {
        let err = PROBLEM.validate(&json!({})).expect_err("missing");
        assert_eq!(err.problem, Problem::Missing);
        assert_eq!(err.field, "title");

        let err = PROBLEM.validate(&json!({"title": null})).expect_err("null");
        assert_eq!(err.problem, Problem::Null);
    }

    #[test]
    fn type_mismatch_names_record_and_field() {
        let err = PROBLEM
            .validate(&json!({"title": "t", "count": "three"}))
            .expect_err("mismatch");
        assert_eq!(err.record, "Problem");
        assert_eq!(err.field, "count");
        assert_eq!(
            err.problem,
            Problem::TypeMismatch {
                expected: "integer".to_string(),
                found: "string",
            }
        );
        let message = err.to_string();
        assert!(message.contains("Problem"));
        assert!(message.contains("count"));
    }

    #[test]
    fn nested_failures_report_the_full_path() {
        let err = PROBLEM
            .validate(&json!({"title": "t", "source": {"pointer": 5}}))
            .expect_err("nested");
        assert_eq!(err.record, "Source");
        assert_eq!(err.field, "pointer");
        assert_eq!(err.path, "source.pointer");

        let err = PROBLEM
            .validate(&json!({"title": "t", "tags": ["a", 2]}))
            .expect_err("list");
        assert_eq!(err.path, "tags[1]");
    }

    #[test]
    fn union_accepts_any_candidate_and_rejects_none() {
        PROBLEM
            .validate(&json!({"title": "t", "owner": {"pointer": "/b"}}))
            .expect("object candidate");
        let err = PROBLEM
            .validate(&json!({"title": "t", "owner": 7}))
            .expect_err("no candidate");
        assert_eq!(
            err.problem,
            Problem::NoMatchingCandidate {
                expected: "string | Source".to_string(),
            }
        );
    }

    #[test]
    fn timestamps_must_parse() {
        let err = PROBLEM
            .validate(&json!({"title": "t", "at": "not a date"}))
            .expect_err("timestamp");
        assert_eq!(err.field, "at");
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = PROBLEM.validate(&json!([1])).expect_err("array");
        assert_eq!(err.problem, Problem::NotAnObject { found: "array" });
    }
}
