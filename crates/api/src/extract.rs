//! Request extractors that reject with the API's `{"error": ...}` shape.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tasker_core::validation::{check_required, RequiredFields};
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been parsed and checked for missing required fields.
///
/// Rejections, in the order they are checked:
/// 1. empty body -> `missing request body`
/// 2. unparseable body, or a member of the wrong type -> `Invalid JSON`
/// 3. zero-valued required fields -> `Missing required fields: a, b`
///
/// Decoding is lenient in the way clients expect: a `null` body or member
/// counts as absent, and keys match field names case-insensitively (an exact
/// match wins over a folded one). No `Content-Type` header is required.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + RequiredFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        parse_and_validate(&body).map(Self)
    }
}

/// Parse a raw request body into `T` and run required-field validation.
pub fn parse_and_validate<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate + RequiredFields,
{
    if body.is_empty() {
        return Err(AppError::BadRequest("missing request body".into()));
    }

    let value: Value = serde_json::from_slice(body).map_err(invalid_json)?;
    let payload: T = serde_json::from_value(normalize_body(value)).map_err(invalid_json)?;

    check_required(&payload)?;
    Ok(payload)
}

fn invalid_json(err: serde_json::Error) -> AppError {
    tracing::debug!(error = %err, "Rejected malformed JSON body");
    AppError::BadRequest("Invalid JSON".into())
}

/// Drop `null` members, fold keys to lower case and treat a `null` body as
/// an empty object. Anything that is not an object passes through untouched
/// and fails typed decoding.
fn normalize_body(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Map::new()),
        Value::Object(members) => {
            let (exact, folded): (Vec<_>, Vec<_>) = members
                .into_iter()
                .filter(|(_, member)| !member.is_null())
                .partition(|(key, _)| *key == key.to_lowercase());

            let mut normalized = Map::with_capacity(exact.len() + folded.len());
            for (key, member) in folded {
                normalized.insert(key.to_lowercase(), member);
            }
            // Exact keys go last so they overwrite folded duplicates.
            normalized.extend(exact);
            Value::Object(normalized)
        }
        other => other,
    }
}

/// Path parameters (usually a tuple of ids) whose parse failures are
/// reported as a 400 `{"error": ...}` body.
#[derive(Debug)]
pub struct PathIds<T>(pub T);

impl<T, S> FromRequestParts<S> for PathIds<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(ids) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        Ok(Self(ids))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use tasker_core::error::CoreError;
    use tasker_db::models::list::CreateList;
    use tasker_db::models::project::CreateProject;
    use tasker_db::models::task::UpdateTask;

    use super::*;

    #[test]
    fn empty_body_short_circuits() {
        let err = parse_and_validate::<CreateProject>(b"").unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "missing request body");
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        let err = parse_and_validate::<CreateProject>(b"{\"title\": ").unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "Invalid JSON");
    }

    #[test]
    fn wrong_type_is_invalid_json() {
        let err = parse_and_validate::<CreateProject>(br#"{"title": 5}"#).unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "Invalid JSON");
    }

    #[test]
    fn missing_fields_reported_together() {
        let err = parse_and_validate::<CreateProject>(b"{}").unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg))
                if msg == "Missing required fields: title, status"
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let err =
            parse_and_validate::<CreateProject>(br#"{"title": "", "status": "open"}"#).unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg)) if msg == "Missing required fields: title"
        );
    }

    #[test]
    fn null_member_counts_as_missing() {
        let err = parse_and_validate::<CreateProject>(br#"{"title": null, "status": "open"}"#)
            .unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg)) if msg == "Missing required fields: title"
        );
    }

    #[test]
    fn null_body_is_an_empty_object() {
        let err = parse_and_validate::<CreateProject>(b"null").unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg))
                if msg == "Missing required fields: title, status"
        );
    }

    #[test]
    fn keys_match_case_insensitively() {
        let payload =
            parse_and_validate::<CreateProject>(br#"{"Title": "A", "STATUS": "b"}"#).unwrap();
        assert_eq!(payload.title, "A");
        assert_eq!(payload.status, "b");
    }

    #[test]
    fn exact_key_wins_over_folded_key() {
        let payload =
            parse_and_validate::<CreateList>(br#"{"TITLE": "folded", "title": "exact"}"#).unwrap();
        assert_eq!(payload.title, "exact");
    }

    #[test]
    fn null_done_defaults_to_false() {
        let payload =
            parse_and_validate::<UpdateTask>(br#"{"title": "Ship", "done": null}"#).unwrap();
        assert!(!payload.done);
    }

    #[test]
    fn array_body_is_invalid_json() {
        let err = parse_and_validate::<CreateProject>(b"[]").unwrap_err();
        assert_matches!(err, AppError::BadRequest(msg) if msg == "Invalid JSON");
    }

    #[test]
    fn done_defaults_to_false() {
        let payload = parse_and_validate::<UpdateTask>(br#"{"title": "Ship"}"#).unwrap();
        assert_eq!(payload.title, "Ship");
        assert!(!payload.done);
    }
}
