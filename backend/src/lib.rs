//! Product specification catalog server.
//!
//! - `config`: `CATALOG_*` environment settings.
//! - `store`: the persistence port and its SQLite adapter.
//! - `catalog`: the specification service (whitelist, merge, validation).
//! - `services`: actix-web handlers and the `/v1/specifications` route table.
//! - `error`: the HTTP error type every handler returns.

pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod store;
