//! # Specification Whitelisted Update Service
//!
//! Backs `PATCH /v1/specifications/{id}`. Works like `PUT`, except that a body
//! naming any key outside `SPECIFICATION_FIELDS` is refused as a whole and
//! nothing is written.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;
use serde_json::Value;

/// Actix web handler for `PATCH /v1/specifications/{id}`.
///
/// # Returns
/// - `200 OK` with the updated specification.
/// - `400 Bad Request` listing the unknown keys, or on schema validation failure.
/// - `404 Not Found` if no specification has this id, checked before the body.
pub async fn process(
    id: web::Path<String>,
    payload: web::Json<Value>,
    service: web::Data<SpecificationService>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let payload = payload.into_inner();
    let specification =
        web::block(move || service.update_whitelisted_by_id(&id, &payload)).await??;
    Ok(HttpResponse::Ok().json(ApiResponse::success(specification)))
}
