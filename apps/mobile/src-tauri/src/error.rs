//! # API Error Type
//!
//! Error type returned to the webview from command handlers. Serialized
//! as `{ code, message }` so the frontend can branch on the code without
//! parsing message text.

use serde::Serialize;

use grocemate_core::ValidationError;
use grocemate_store::StoreError;

/// Error payload sent back across the command boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    StoreError,
    Internal,
}

impl ApiError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: format!("{entity} not found: {id}"),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::NotFound { .. } => ErrorCode::NotFound,
            _ => ErrorCode::StoreError,
        };
        Self {
            code,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_not_found_code() {
        let err: ApiError = StoreError::not_found("order", "GM-9999").into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn validation_error_maps_to_validation_code() {
        let err: ApiError = ValidationError::Required {
            field: "search".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::NotFound).unwrap();
        assert_eq!(json, "\"NOT_FOUND\"");
    }
}
