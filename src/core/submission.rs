//! Form submissions as returned by the forms API, and the comment entries derived from them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::core::gravatar;

/// Key used for submissions that carry no page path.
pub const UNCLASSIFIED_PATH: &str = "undefined";

/// One submission record. Only `data` matters; everything else the API sends is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub data: SubmissionData,
}

/// Submitted form fields. The remote side is not validated, so every field is
/// optional and keeps whatever JSON type it arrived with. `None` means the key
/// was missing; an explicit `null` is `Some(Value::Null)`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubmissionData {
    #[serde(default, deserialize_with = "present")]
    pub first_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub last_name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub received: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub path: Option<Value>,
}

/// Only runs for keys that exist, so `null` survives as `Some(Value::Null)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SubmissionData {
    /// Page path this submission belongs to, or the unclassified bucket.
    pub fn page_path(&self) -> String {
        self.path
            .as_ref()
            .map(value_text)
            .unwrap_or_else(|| UNCLASSIFIED_PATH.to_string())
    }
}

/// A comment as written to `comments.json`. Missing fields are omitted, `null` is kept.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommentEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Value>,
    pub gravatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

impl CommentEntry {
    pub fn from_submission(data: &SubmissionData) -> Self {
        let email = match &data.email {
            None | Some(Value::Null) => String::new(),
            Some(value) => value_text(value),
        };
        Self {
            first_name: data.first_name.as_ref().map(integral_numbers),
            last_name: data.last_name.as_ref().map(integral_numbers),
            gravatar: gravatar::avatar_url(&email),
            comment: data.comment.as_ref().map(trim_comment),
            received: data.received.as_ref().map(integral_numbers),
        }
    }
}

fn trim_comment(comment: &Value) -> Value {
    match comment {
        Value::String(s) => Value::String(s.trim().to_string()),
        other => integral_numbers(other),
    }
}

/// Floats without a fractional part become integers (`1.0` is written as `1`),
/// the way web tooling prints numbers. Applied recursively.
fn integral_numbers(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9_007_199_254_740_992.0 => {
                Value::Number(Number::from(f as i64))
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_numbers).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_numbers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Text form of a JSON value: strings as-is, anything else as its JSON encoding.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => integral_numbers(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> SubmissionData {
        serde_json::from_value::<Submission>(value).unwrap().data
    }

    #[test]
    fn trims_comment_text() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"comment": "  hello  "}})));
        assert_eq!(entry.comment, Some(json!("hello")));
    }

    #[test]
    fn trims_newlines_and_tabs() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"comment": "\n\thi there\n"}})));
        assert_eq!(entry.comment, Some(json!("hi there")));
    }

    #[test]
    fn gravatar_comes_from_email() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"email": "a@x.com"}})));
        assert_eq!(entry.gravatar, gravatar::avatar_url("a@x.com"));
    }

    #[test]
    fn missing_email_hashes_empty_string() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {}})));
        assert_eq!(entry.gravatar, gravatar::avatar_url(""));
    }

    #[test]
    fn copies_names_and_received_verbatim() {
        let entry = CommentEntry::from_submission(&data(json!({
            "data": {"first_name": "Ada", "last_name": "Lovelace", "received": 1700000000}
        })));
        assert_eq!(entry.first_name, Some(json!("Ada")));
        assert_eq!(entry.last_name, Some(json!("Lovelace")));
        assert_eq!(entry.received, Some(json!(1700000000)));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"comment": "x"}})));
        let value = serde_json::to_value(&entry).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"gravatar"));
        assert!(keys.contains(&"comment"));
    }

    #[test]
    fn missing_data_object_is_tolerated() {
        let submission: Submission = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(submission.data.page_path(), UNCLASSIFIED_PATH);
    }

    #[test]
    fn missing_path_goes_to_unclassified_bucket() {
        assert_eq!(data(json!({"data": {"comment": "x"}})).page_path(), "undefined");
    }

    #[test]
    fn non_string_path_uses_json_text() {
        assert_eq!(data(json!({"data": {"path": 42}})).page_path(), "42");
    }

    #[test]
    fn non_string_comment_is_kept() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"comment": 7}})));
        assert_eq!(entry.comment, Some(json!(7)));
    }

    #[test]
    fn explicit_null_is_kept_in_entry() {
        let entry = CommentEntry::from_submission(&data(json!({
            "data": {"first_name": null, "received": null, "comment": "x"}
        })));
        assert_eq!(entry.first_name, Some(Value::Null));
        assert_eq!(entry.received, Some(Value::Null));
        assert!(entry.last_name.is_none());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.starts_with("{\"first_name\":null,\"gravatar\":"), "got {}", json);
        assert!(json.contains("\"received\":null"));
        assert!(!json.contains("last_name"));
    }

    #[test]
    fn null_path_is_keyed_as_null() {
        assert_eq!(data(json!({"data": {"path": null}})).page_path(), "null");
    }

    #[test]
    fn null_email_hashes_empty_string() {
        let entry = CommentEntry::from_submission(&data(json!({"data": {"email": null}})));
        assert_eq!(entry.gravatar, gravatar::avatar_url(""));
    }

    #[test]
    fn integral_float_received_is_written_as_integer() {
        let submission: Submission =
            serde_json::from_str(r#"{"data": {"received": 1.0, "first_name": 2.5}}"#).unwrap();
        let entry = CommentEntry::from_submission(&submission.data);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"received\":1}"), "got {}", json);
        assert!(json.contains("\"first_name\":2.5"), "got {}", json);
    }

    #[test]
    fn integral_float_path_is_keyed_as_integer() {
        let submission: Submission = serde_json::from_str(r#"{"data": {"path": 3.0}}"#).unwrap();
        assert_eq!(submission.data.page_path(), "3");
    }
}
