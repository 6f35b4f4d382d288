//! # Specification Creation Service
//!
//! Backs `POST /v1/specifications`.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: the JSON body is extracted as a raw `serde_json::Value`.
//!     Bodies that are not JSON, or exceed the configured limit, are refused by
//!     the extractor through `json_config`.
//! 2.  **Whitelist copy**: `SpecificationService::create_record` keeps only the
//!     fields listed in `SPECIFICATION_FIELDS`. Anything else, including an `id`
//!     or timestamps sent by the caller, is discarded.
//! 3.  **Validation**: the copied fields must form a complete specification;
//!     `expandable_memory` may be omitted and defaults to `false`.
//! 4.  **Persistence**: a fresh UUID and both timestamps are assigned and the
//!     record is inserted.
//! 5.  **HTTP Response**: `201 Created` with the stored record.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;
use serde_json::Value;

/// Actix web handler for `POST /v1/specifications`.
///
/// # Arguments
/// * `payload` - The request body, read as untyped JSON.
/// * `service` - The shared catalog service.
///
/// # Returns
/// - `201 Created` with the stored specification, id and timestamps included.
/// - `400 Bad Request` if the body is not JSON or fails schema validation.
pub async fn process(
    payload: web::Json<Value>,
    service: web::Data<SpecificationService>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let specification = web::block(move || service.create_record(&payload)).await??;
    Ok(HttpResponse::Created().json(ApiResponse::success(specification)))
}
