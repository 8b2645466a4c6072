//! Request handlers for the document API.
//!
//! Each handler extracts its inputs, calls exactly one store operation, and
//! maps the outcome to a response. Bodies are parsed as JSON whatever the
//! request's `Content-Type`.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use super::page::INDEX_HTML;
use super::response::ApiError;
use super::AppState;
use crate::document::Document;
use crate::error::{Error, Result};

const CREATE_FAILED_MESSAGE: &str = "Failed to create document";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update document";
const SUMMARY_REQUIRED_MESSAGE: &str = "Summary is required";
const INVALID_NUMBER_MESSAGE: &str = "Invalid document number";

type HandlerResult<T> = std::result::Result<T, ApiError>;

/// Body of `POST /documents`.
#[derive(Debug, Deserialize)]
struct CreateDocumentRequest {
    number: Option<String>,
    creation_date: Option<String>,
    summary: Option<String>,
}

impl CreateDocumentRequest {
    /// Split into `(number, creation_date, summary)`, requiring all three.
    fn into_parts(self) -> Result<(String, String, String)> {
        let number = self.number.ok_or(Error::MissingField { field: "number" })?;
        let creation_date = self.creation_date.ok_or(Error::MissingField {
            field: "creation_date",
        })?;
        let summary = self.summary.ok_or(Error::MissingField { field: "summary" })?;
        Ok((number, creation_date, summary))
    }
}

/// Body of `PUT /documents/:number`.
#[derive(Debug, Deserialize)]
struct UpdateSummaryRequest {
    summary: Option<String>,
}

impl UpdateSummaryRequest {
    /// The new summary; absent and empty are both rejected.
    fn into_summary(self) -> Result<String> {
        self.summary
            .filter(|summary| !summary.is_empty())
            .ok_or(Error::MissingField { field: "summary" })
    }
}

/// Decode a request body that must be a JSON object.
///
/// Serde's derived structs also accept arrays by position, so the shape is
/// checked before field extraction.
fn parse_body<T: DeserializeOwned>(body: std::result::Result<Bytes, BytesRejection>) -> Result<T> {
    let body = body.map_err(|rejection| Error::RequestBody(rejection.to_string()))?;
    let value: Value = serde_json::from_slice(&body)?;
    if !value.is_object() {
        return Err(Error::Json(<serde_json::Error as serde::de::Error>::custom(
            "request body must be a JSON object",
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// The `:number` path segment, or a JSON 400 when it cannot be decoded.
fn document_number(path: std::result::Result<Path<String>, PathRejection>) -> HandlerResult<String> {
    path.map(|Path(number)| number).map_err(|rejection| {
        warn!("Rejected document path: {rejection}");
        ApiError::bad_request(INVALID_NUMBER_MESSAGE)
    })
}

/// `Content-Disposition` value for an attachment, quoting the file name.
fn attachment_disposition(filename: &str) -> String {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{escaped}\"")
}

pub(crate) async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(crate) async fn healthz_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn create_document_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> HandlerResult<(StatusCode, Json<Document>)> {
    let created = parse_body::<CreateDocumentRequest>(body)
        .and_then(CreateDocumentRequest::into_parts)
        .and_then(|(number, creation_date, summary)| {
            state.store().create(&number, &creation_date, &summary)
        })
        .map_err(|err| ApiError::from_error(&err, CREATE_FAILED_MESSAGE))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn get_document_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> HandlerResult<Json<Document>> {
    let number = document_number(path)?;
    let doc = state
        .store()
        .get(&number)?
        .ok_or_else(|| Error::not_found(number))?;
    Ok(Json(doc))
}

pub(crate) async fn download_document_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> HandlerResult<Response> {
    let number = document_number(path)?;
    let doc = state
        .store()
        .get(&number)?
        .ok_or_else(|| Error::not_found(number.as_str()))?;

    let disposition = HeaderValue::from_str(&attachment_disposition(&doc.download_filename()))
        .map_err(|err| {
            error!("Cannot build download header for {number}: {err}");
            ApiError::internal()
        })?;
    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        ),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, doc.to_text()).into_response())
}

pub(crate) async fn update_document_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> HandlerResult<Json<Document>> {
    let number = document_number(path)?;
    let request: UpdateSummaryRequest =
        parse_body(body).map_err(|err| ApiError::from_error(&err, UPDATE_FAILED_MESSAGE))?;
    let summary = request
        .into_summary()
        .map_err(|err| ApiError::from_error(&err, SUMMARY_REQUIRED_MESSAGE))?;

    let doc = state
        .store()
        .update_summary(&number, &summary)?
        .ok_or_else(|| Error::not_found(number))?;
    Ok(Json(doc))
}

pub(crate) async fn delete_document_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> HandlerResult<Json<Value>> {
    let number = document_number(path)?;
    if !state.store().delete(&number)? {
        return Err(Error::not_found(number).into());
    }
    Ok(Json(json!({ "message": format!("Document {number} deleted") })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(body: &str) -> Result<(String, String, String)> {
        parse_body::<CreateDocumentRequest>(Ok(Bytes::from(body.to_string())))
            .and_then(CreateDocumentRequest::into_parts)
    }

    fn update_request(body: &str) -> Result<String> {
        parse_body::<UpdateSummaryRequest>(Ok(Bytes::from(body.to_string())))
            .and_then(UpdateSummaryRequest::into_summary)
    }

    #[test]
    fn test_create_request_all_fields() {
        let (number, date, summary) = create_request(
            r#"{"number":"DOC-1","creation_date":"2024-01-15","summary":"first draft"}"#,
        )
        .unwrap();
        assert_eq!(number, "DOC-1");
        assert_eq!(date, "2024-01-15");
        assert_eq!(summary, "first draft");
    }

    #[test]
    fn test_create_request_missing_field() {
        let err = create_request(r#"{"number":"DOC-1","summary":"x"}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "creation_date"
            }
        ));
    }

    #[test]
    fn test_create_request_null_field_is_missing() {
        let err = create_request(r#"{"number":null,"creation_date":"2024-01-15","summary":"x"}"#)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_request_malformed_json() {
        let err = create_request("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_create_request_wrong_type() {
        let err = create_request(r#"{"number":42,"creation_date":"2024-01-15","summary":"x"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_create_request_rejects_array_body() {
        let err = create_request(r#"["DOC-A","2024-01-15","from array"]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_create_request_rejects_scalar_body() {
        assert!(matches!(create_request("42").unwrap_err(), Error::Json(_)));
        assert!(matches!(create_request("null").unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_update_request_rejects_array_body() {
        let err = update_request(r#"["via array"]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_update_request_summary() {
        assert_eq!(update_request(r#"{"summary":"revised"}"#).unwrap(), "revised");
    }

    #[test]
    fn test_update_request_missing_or_empty_summary() {
        assert!(update_request("{}").unwrap_err().is_validation());
        assert!(update_request(r#"{"summary":""}"#)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_update_request_ignores_extra_fields() {
        let summary = update_request(r#"{"summary":"s","number":"other"}"#).unwrap();
        assert_eq!(summary, "s");
    }

    #[test]
    fn test_attachment_disposition() {
        assert_eq!(
            attachment_disposition("DOC-1_document.txt"),
            "attachment; filename=\"DOC-1_document.txt\""
        );
        assert_eq!(
            attachment_disposition("a\"b_document.txt"),
            "attachment; filename=\"a\\\"b_document.txt\""
        );
    }
}
