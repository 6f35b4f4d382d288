//! # Specification Service Module
//!
//! HTTP surface of the specification catalog. Every handler extracts its
//! inputs, runs the matching [`SpecificationService`] call on actix's
//! blocking pool (the store is synchronous SQLite), and answers with an
//! [`ApiResponse`] envelope. Failures are returned as [`ApiError`] and
//! rendered centrally; no handler validates input on its own.
//!
//! ## Sub-modules:
//! - `list`: every stored specification.
//! - `get`: one specification by id.
//! - `create`: a new specification from the whitelisted fields of the body.
//! - `update`: permissive shallow merge of the body onto a specification.
//! - `patch`: whitelisted merge; bodies naming unknown fields are refused.
//! - `delete`: removes a specification and returns its last state.
//!
//! [`SpecificationService`]: crate::catalog::SpecificationService
//! [`ApiResponse`]: catalog_common::responses::ApiResponse
//! [`ApiError`]: crate::error::ApiError

mod create;
mod delete;
mod get;
mod list;
mod patch;
mod update;

use crate::error::method_not_allowed;
use actix_web::web::{delete, get, patch, post, put, resource, route, scope};
use actix_web::Scope;

/// The base path for all specification endpoints.
const API_PATH: &str = "/v1/specifications";

/// Configures and returns the Actix `Scope` for all specification routes.
///
/// # Registered Routes:
///
/// | Method   | Path    | Handler           | Success                      |
/// |----------|---------|-------------------|------------------------------|
/// | `GET`    | `/`     | `list::process`   | `200` array of records       |
/// | `POST`   | `/`     | `create::process` | `201` created record         |
/// | `GET`    | `/{id}` | `get::process`    | `200` record                 |
/// | `PUT`    | `/{id}` | `update::process` | `200` updated record         |
/// | `PATCH`  | `/{id}` | `patch::process`  | `200` updated record         |
/// | `DELETE` | `/{id}` | `delete::process` | `200` record as last stored  |
///
/// A known path with an unsupported method answers `405 Method Not Allowed`
/// with the usual error envelope.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(list::process))
                .route(post().to(create::process))
                .default_service(route().to(method_not_allowed)),
        )
        .service(
            resource("/{id}")
                .route(get().to(get::process))
                .route(put().to(update::process))
                .route(patch().to(patch::process))
                .route(delete().to(delete::process))
                .default_service(route().to(method_not_allowed)),
        )
}
