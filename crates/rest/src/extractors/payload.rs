//! Request payload extractor.
//!
//! Extracts typed create/update payloads from request bodies, accepting both
//! `application/json` and `application/x-www-form-urlencoded` encodings.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for typed request payloads.
///
/// The payload type is deserialized from the request body according to the
/// `Content-Type` header. A missing header is treated as JSON.
///
/// # Example
///
/// ```rust,ignore
/// use registrar_persistence::types::NewCourse;
/// use registrar_rest::extractors::Payload;
///
/// async fn create_handler(Payload(new): Payload<NewCourse>) {
///     println!("Course name: {}", new.name);
/// }
/// ```
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<T> Payload<T> {
    /// Consumes the extractor and returns the inner payload.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Error type for payload extraction failures.
#[derive(Debug)]
pub enum PayloadRejection {
    /// Body could not be read or deserialized.
    InvalidBody(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        let error = match self {
            PayloadRejection::InvalidBody(msg) => RestError::BadRequest {
                message: format!("Invalid request body: {}", msg),
            },
            PayloadRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
        };
        error.into_response()
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Check content type (must own the string before moving req)
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| PayloadRejection::InvalidBody(e.to_string()))?;

        let value = if content_type.contains("json") {
            serde_json::from_slice(&bytes)
                .map_err(|e| PayloadRejection::InvalidBody(e.to_string()))?
        } else if content_type.contains("x-www-form-urlencoded") {
            serde_urlencoded::from_bytes(&bytes)
                .map_err(|e| PayloadRejection::InvalidBody(e.to_string()))?
        } else {
            return Err(PayloadRejection::UnsupportedMediaType(content_type));
        };

        Ok(Payload(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_persistence::types::{CourseUpdate, NewCourse};

    #[test]
    fn test_json_payload_parses() {
        let new: NewCourse =
            serde_json::from_slice(br#"{"name": "Topology", "students": [1, 2]}"#).unwrap();
        assert_eq!(new.name, "Topology");
        assert_eq!(new.students, vec![1, 2]);
    }

    #[test]
    fn test_form_payload_parses() {
        let new: NewCourse = serde_urlencoded::from_bytes(b"name=test_creation").unwrap();
        assert_eq!(new.name, "test_creation");
        assert!(new.students.is_empty());
    }

    #[test]
    fn test_form_partial_update_parses() {
        let patch: CourseUpdate = serde_urlencoded::from_bytes(b"name=renamed").unwrap();
        assert_eq!(patch.name.as_deref(), Some("renamed"));
        assert!(patch.students.is_none());
    }

    #[test]
    fn test_into_inner() {
        let payload = Payload(NewCourse {
            name: "Probability".to_string(),
            students: vec![],
        });
        assert_eq!(payload.into_inner().name, "Probability");
    }
}
