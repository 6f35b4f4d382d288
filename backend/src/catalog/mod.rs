//! The specification catalog: the domain rules around a [`SpecificationStore`].
//!
//! - `schema`: the field whitelist, the shallow merge and the validation every
//!   write goes through.
//! - `service`: the five catalog operations plus the whitelisted update.
//!
//! [`SpecificationStore`]: crate::store::SpecificationStore

mod schema;
mod service;

pub use schema::SPECIFICATION_FIELDS;
pub use service::{SpecificationError, SpecificationService};

#[cfg(test)]
pub(crate) mod fixtures;
