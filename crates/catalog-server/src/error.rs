//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_sdk::SdkError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Catalog failed to build the requested query
    CatalogError(String),

    /// Invalid request
    InvalidRequest(String),

    /// Internal server error
    InternalError(String),

    /// Not found
    NotFound(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::CatalogError(msg) => write!(f, "Catalog error: {}", msg),
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::CatalogError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ServerError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<SdkError> for ServerError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::UnknownCategory(_) => ServerError::NotFound(err.to_string()),
            SdkError::InvalidQuery(_) => ServerError::InvalidRequest(err.to_string()),
            SdkError::CompileError(_) => ServerError::CatalogError(err.to_string()),
            SdkError::ConfigError(_) | SdkError::RegistryError(_) | SdkError::IoError(_) => {
                ServerError::InternalError(err.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::InvalidRequest("missing field".to_string());
        assert_eq!(err.to_string(), "Invalid request: missing field");

        let err = ServerError::NotFound("category".to_string());
        assert_eq!(err.to_string(), "Not found: category");
    }

    #[test]
    fn test_unknown_category_maps_to_not_found() {
        let err: ServerError = SdkError::UnknownCategory("zoom".to_string()).into();
        assert!(matches!(err, ServerError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_query_maps_to_bad_request() {
        let err: ServerError = SdkError::InvalidQuery("bad escape".to_string()).into();
        assert!(err.to_string().contains("bad escape"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_error_is_internal() {
        let err: ServerError = SdkError::ConfigError("page size".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let server_err: ServerError = anyhow::anyhow!("something went wrong").into();
        assert!(server_err.to_string().contains("Internal error"));
        assert!(server_err.to_string().contains("something went wrong"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServerError>();
    }
}
