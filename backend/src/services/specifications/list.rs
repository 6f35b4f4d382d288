//! # Specification Listing Service
//!
//! Backs `GET /v1/specifications`: every stored specification, unfiltered and
//! unpaginated, in the order the records were created.

use crate::catalog::SpecificationService;
use crate::error::ApiError;
use actix_web::{web, HttpResponse};
use catalog_common::responses::ApiResponse;

/// Actix web handler for `GET /v1/specifications`.
///
/// # Returns
/// - `200 OK` with an `ApiResponse` wrapping the array of specifications,
///   empty when nothing is stored.
/// - `500 Internal Server Error` if the store cannot be read.
pub async fn process(service: web::Data<SpecificationService>) -> Result<HttpResponse, ApiError> {
    let specifications = web::block(move || service.find_all()).await??;
    Ok(HttpResponse::Ok().json(ApiResponse::success(specifications)))
}
