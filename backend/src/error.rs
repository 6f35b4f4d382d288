use crate::catalog::SpecificationError;
use actix_web::error::{BlockingError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use catalog_common::responses::ErrorResponse;
use log::error;
use thiserror::Error;

/// Every failure an endpoint can answer with.
///
/// Handlers never build error responses themselves; they return `ApiError`
/// and this type maps it to a status code and an [`ErrorResponse`] body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Specification(#[from] SpecificationError),

    #[error("Malformed request body: {0}")]
    MalformedPayload(String),

    #[error("Request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Route not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Blocking worker pool unavailable")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Specification(SpecificationError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Specification(SpecificationError::Validation(_))
            | ApiError::Specification(SpecificationError::UnknownFields { .. }) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Specification(SpecificationError::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Server-side details stay in the log.
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse::new(message))
    }
}

/// JSON extractor settings shared by every endpoint: body size limit, and
/// extraction failures reported through [`ApiError`].
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(move |err, _req| {
            let api_error = match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiError::PayloadTooLarge { limit }
                }
                other => ApiError::MalformedPayload(other.to_string()),
            };
            api_error.into()
        })
}

/// Fallback for every unmatched route.
pub async fn route_not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}

/// Fallback for a known resource reached with a method it does not serve.
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
