//! # Specification Retrieval Service
//!
//! Backs `GET /v1/specifications/{id}`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives the specification id from the URL path.
//! 2.  **Lookup**: `SpecificationService::find_by_id` runs on the blocking pool
//!     and reads the record from the store.
//! 3.  **HTTP Response**: the record is wrapped in an `ApiResponse` envelope. A
//!     missing id comes back as `SpecificationError::NotFound`, which `ApiError`
//!     renders as `404`.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;

/// Actix web handler for `GET /v1/specifications/{id}`.
///
/// # Arguments
/// * `id` - The specification id, extracted from the URL path.
/// * `service` - The shared catalog service.
///
/// # Returns
/// - `200 OK` with the specification.
/// - `404 Not Found` if no specification has this id.
pub async fn process(
    id: web::Path<String>,
    service: web::Data<SpecificationService>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let specification = web::block(move || service.find_by_id(&id)).await??;
    Ok(HttpResponse::Ok().json(ApiResponse::success(specification)))
}
