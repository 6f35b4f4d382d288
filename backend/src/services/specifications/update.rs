//! # Specification Update Service
//!
//! Backs `PUT /v1/specifications/{id}`, the permissive update.
//!
//! ## Workflow
//!
//! 1.  **Lookup**: the stored record is loaded; a missing id is `404` whatever
//!     the body holds.
//! 2.  **Shallow merge**: every top-level key of the body overwrites the stored
//!     value. Nested objects such as `battery` are replaced whole.
//! 3.  **Validation**: the merged document is checked against the schema as a
//!     whole. Keys outside the schema are dropped here and never stored.
//! 4.  **Persistence**: `updated_at` is bumped and the record is rewritten;
//!     `id` and `created_at` never change.
//!
//! `PATCH` (see `patch.rs`) is the variant that refuses unknown keys instead.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;
use serde_json::Value;

/// Actix web handler for `PUT /v1/specifications/{id}`.
///
/// # Arguments
/// * `id` - The specification id, extracted from the URL path.
/// * `payload` - A partial specification to merge over the stored one.
/// * `service` - The shared catalog service.
///
/// # Returns
/// - `200 OK` with the updated specification.
/// - `400 Bad Request` if the merged document fails schema validation.
/// - `404 Not Found` if no specification has this id.
pub async fn process(
    id: web::Path<String>,
    payload: web::Json<Value>,
    service: web::Data<SpecificationService>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    let specification = web::block(move || service.update_by_id(&id, &payload)).await??;
    Ok(HttpResponse::Ok().json(ApiResponse::success(specification)))
}
