//! Response envelopes shared by every endpoint.
//!
//! Successful responses always carry a top-level `data` key; failures always
//! carry a top-level `errors` key. The two never appear together in a single
//! response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a validated input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameters.
    Params,
    /// Request body.
    Body,
}

/// A single validation failure, in the shape clients receive.
///
/// `value` holds the rejected input and is omitted from the serialized form
/// when the field was absent from the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

impl FieldError {
    pub fn new(
        path: impl Into<String>,
        location: Location,
        value: Option<Value>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// HTTP 400 response listing every failed validation in pipeline order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Standard 200 OK envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// HTTP 201 Created envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created<T> {
    pub data: T,
}

impl<T> Created<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_error_omits_absent_value() {
        let error = FieldError::new("price", Location::Body, None, "El precio es obligatorio");
        let serialized = serde_json::to_value(&error).unwrap();

        assert_eq!(serialized["type"], "field");
        assert_eq!(serialized["path"], "price");
        assert_eq!(serialized["location"], "body");
        assert!(serialized.get("value").is_none());
    }

    #[test]
    fn test_field_error_echoes_rejected_value() {
        let error = FieldError::new(
            "id",
            Location::Params,
            Some(json!("abc")),
            "ID no valido",
        );
        let serialized = serde_json::to_value(&error).unwrap();

        assert_eq!(serialized["value"], "abc");
        assert_eq!(serialized["location"], "params");
    }

    #[test]
    fn test_validation_errors_status() {
        let errors = ValidationErrors::new(vec![FieldError::new(
            "name",
            Location::Body,
            None,
            "El nombre es obligatorio",
        )]);
        assert_eq!(errors.len(), 1);

        let response = errors.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_data_envelope() {
        let serialized = serde_json::to_value(Data::new(vec![1, 2, 3])).unwrap();
        assert_eq!(serialized, json!({ "data": [1, 2, 3] }));

        let response = Data::new("ok").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_created_envelope() {
        let response = Created::new(json!({ "id": 1 })).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
