//! Types shared between the catalog server and its clients.
//!
//! - `model`: the product specification record as it is stored and served.
//! - `responses`: the JSON envelopes every endpoint answers with.

pub mod model;
pub mod responses;
