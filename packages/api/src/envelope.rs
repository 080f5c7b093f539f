//! # Response envelopes: one place for backend shape drift
//!
//! The backend wraps the same payload in several ways depending on the
//! endpoint and on pagination:
//!
//! | Shape | Example |
//! |-------|---------|
//! | paginated under the plural | `{ "fines": { "data": [...] } }` |
//! | generic wrapper | `{ "data": [...] }` |
//! | named wrapper | `{ "books": [...] }` |
//! | bare | `[...]` |
//!
//! [`list`] tries those candidates in that order and takes the first one that
//! is present and not `null`. If that candidate is an array it is decoded;
//! anything else yields an empty list. [`record`] does the same for a single
//! object with the candidates `singular`, `data`, bare body.
//!
//! [`error_message`] pulls the human-readable message out of an error body.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Key names under which a resource may be wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceNames {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ResourceNames {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }
}

pub const BOOKS: ResourceNames = ResourceNames::new("book", "books");
pub const AUTHORS: ResourceNames = ResourceNames::new("author", "authors");
pub const CATEGORIES: ResourceNames = ResourceNames::new("category", "categories");
pub const LOANS: ResourceNames = ResourceNames::new("loan", "loans");
pub const PENDING_LOANS: ResourceNames = ResourceNames::new("loan", "pending_loans");
pub const FINES: ResourceNames = ResourceNames::new("fine", "fines");
pub const USERS: ResourceNames = ResourceNames::new("user", "users");
pub const REPORT: ResourceNames = ResourceNames::new("report", "reports");

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// The list candidate chosen for `body`, if any.
fn list_candidate<'a>(body: &'a Value, names: ResourceNames) -> Option<&'a Value> {
    present(body.get(names.plural).and_then(|p| p.get("data")))
        .or_else(|| present(body.get("data")))
        .or_else(|| present(body.get(names.plural)))
        .or_else(|| present(Some(body)))
}

/// Decode a list response.
///
/// Never fails on shape: a body with no array where one is expected is an
/// empty list. Only elements that do not fit `T` produce an error.
pub fn list<T: DeserializeOwned>(body: &Value, names: ResourceNames) -> Result<Vec<T>, ApiError> {
    match list_candidate(body, names) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| serde_json::from_value(item.clone()).map_err(ApiError::from))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// The object a single-record response wraps, or the body itself.
pub fn record_value(body: &Value, names: ResourceNames) -> &Value {
    present(body.get(names.singular))
        .filter(|v| v.is_object())
        .or_else(|| present(body.get("data")).filter(|v| v.is_object()))
        .unwrap_or(body)
}

/// Decode a single-record response.
pub fn record<T: DeserializeOwned>(body: &Value, names: ResourceNames) -> Result<T, ApiError> {
    Ok(serde_json::from_value(record_value(body, names).clone())?)
}

/// Decode the record a mutation answered with, if it answered with one.
///
/// An empty body, `null` or a bare acknowledgement (`message`, `status`,
/// `success`) is `None`: the change went through and the caller re-fetches.
pub fn optional_record<T: DeserializeOwned>(
    body: &Value,
    names: ResourceNames,
) -> Result<Option<T>, ApiError> {
    const ACKNOWLEDGEMENT: [&str; 3] = ["message", "status", "success"];
    match record_value(body, names) {
        Value::Object(fields) if fields.keys().any(|k| !ACKNOWLEDGEMENT.contains(&k.as_str())) => {
            Ok(Some(record(body, names)?))
        }
        _ => Ok(None),
    }
}

/// Extract the human-readable message from an error body.
///
/// Order: `message`, then every entry of a validation `errors` map joined
/// with `", "`, then `error`. A plain-string body is used as-is.
pub fn error_message(body: &Value) -> Option<String> {
    if let Some(text) = body.as_str() {
        return non_empty(text);
    }
    if let Some(text) = body.get("message").and_then(Value::as_str) {
        if let Some(text) = non_empty(text) {
            return Some(text);
        }
    }
    if let Some(errors) = body.get("errors").and_then(Value::as_object) {
        let entries: Vec<String> = errors
            .values()
            .flat_map(|v| match v {
                Value::String(s) => vec![s.as_str()],
                Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                _ => Vec::new(),
            })
            .filter_map(non_empty)
            .collect();
        if !entries.is_empty() {
            return Some(entries.join(", "));
        }
    }
    body.get("error").and_then(Value::as_str).and_then(non_empty)
}

/// A top-level `token` string, if the response carries one.
pub fn token(body: &Value) -> Option<&str> {
    body.get("token").and_then(Value::as_str).filter(|t| !t.is_empty())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u64,
    }

    fn ids(body: Value, names: ResourceNames) -> Vec<u64> {
        list::<Row>(&body, names).unwrap().into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_all_list_shapes_decode_to_same_rows() {
        let rows = json!([{ "id": 1 }, { "id": 2 }]);
        assert_eq!(ids(rows.clone(), BOOKS), vec![1, 2]);
        assert_eq!(ids(json!({ "data": rows.clone() }), BOOKS), vec![1, 2]);
        assert_eq!(ids(json!({ "books": rows.clone() }), BOOKS), vec![1, 2]);
        assert_eq!(ids(json!({ "fines": { "data": rows.clone(), "total": 2 } }), FINES), vec![1, 2]);
        assert_eq!(ids(json!({ "pending_loans": rows }), PENDING_LOANS), vec![1, 2]);
    }

    #[test]
    fn test_non_array_candidate_is_empty() {
        assert!(ids(json!({ "data": { "id": 1 } }), BOOKS).is_empty());
        assert!(ids(json!({ "message": "ok" }), BOOKS).is_empty());
        assert!(ids(json!("nothing"), BOOKS).is_empty());
        assert!(ids(Value::Null, BOOKS).is_empty());
    }

    #[test]
    fn test_first_present_candidate_wins() {
        // A null `data` is skipped
        let body = json!({ "data": null, "books": [{ "id": 9 }] });
        assert_eq!(ids(body, BOOKS), vec![9]);

        let body = json!({ "data": [{ "id": 1 }], "books": [{ "id": 9 }] });
        assert_eq!(ids(body, BOOKS), vec![1]);
    }

    #[test]
    fn test_record_candidates() {
        let expected = Row { id: 4 };
        assert_eq!(record::<Row>(&json!({ "book": { "id": 4 } }), BOOKS).unwrap(), expected);
        assert_eq!(record::<Row>(&json!({ "data": { "id": 4 } }), BOOKS).unwrap(), expected);
        assert_eq!(record::<Row>(&json!({ "id": 4 }), BOOKS).unwrap(), expected);
        assert!(matches!(
            record::<Row>(&json!({ "message": "gone" }), BOOKS),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_optional_record_tolerates_empty_answers() {
        assert_eq!(optional_record::<Row>(&Value::Null, LOANS).unwrap(), None);
        assert_eq!(optional_record::<Row>(&json!(""), LOANS).unwrap(), None);
        assert_eq!(
            optional_record::<Row>(&json!({ "message": "Loan approved" }), LOANS).unwrap(),
            None
        );
        assert_eq!(
            optional_record::<Row>(&json!({ "message": "ok", "loan": { "id": 3 } }), LOANS).unwrap(),
            Some(Row { id: 3 })
        );
        assert!(optional_record::<Row>(&json!({ "status": "approved", "loan_id": 3 }), LOANS).is_err());
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let body = json!({ "errors": {
            "isbn": ["The isbn has already been taken."],
            "title": ["The title field is required.", ""]
        } });
        assert_eq!(
            error_message(&body).as_deref(),
            Some("The isbn has already been taken., The title field is required.")
        );
    }

    #[test]
    fn test_error_message_order() {
        assert_eq!(
            error_message(&json!({ "message": "Book not available", "error": "x" })).as_deref(),
            Some("Book not available")
        );
        assert_eq!(
            error_message(&json!({ "errors": { "isbn": ["The isbn has already been taken."] } }))
                .as_deref(),
            Some("The isbn has already been taken.")
        );
        assert_eq!(
            error_message(&json!({ "error": "Unauthenticated" })).as_deref(),
            Some("Unauthenticated")
        );
        assert_eq!(error_message(&json!({ "message": "" })), None);
        assert_eq!(error_message(&json!({})), None);
    }

    #[test]
    fn test_token_is_detected() {
        assert_eq!(token(&json!({ "token": "abc", "user": {} })), Some("abc"));
        assert_eq!(token(&json!({ "token": "" })), None);
        assert_eq!(token(&json!([])), None);
    }
}
