//! # Specification Deletion Service
//!
//! Backs `DELETE /v1/specifications/{id}`. The record is loaded first so the
//! response can carry its last stored state rather than a bare confirmation.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;

/// Actix web handler for `DELETE /v1/specifications/{id}`.
///
/// # Arguments
/// * `id` - The specification id, extracted from the URL path.
/// * `service` - The shared catalog service.
///
/// # Returns
/// - `200 OK` with the specification as it was last stored.
/// - `404 Not Found` if no specification has this id.
pub async fn process(
    id: web::Path<String>,
    service: web::Data<SpecificationService>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let specification = web::block(move || service.delete_by_id(&id)).await??;
    Ok(HttpResponse::Ok().json(ApiResponse::success(specification)))
}
