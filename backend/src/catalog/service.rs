use super::schema::{as_object, shallow_merge, to_document, unknown_fields, validate, whitelisted};
use crate::store::{SpecificationStore, StoreError};
use catalog_common::model::specification::Specification;
use chrono::Utc;
use log::{debug, info};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Failures of catalog operations. Carries no HTTP status; the boundary
/// layer decides how each variant is reported.
#[derive(Error, Debug)]
pub enum SpecificationError {
    #[error("Specification {id} not found")]
    NotFound { id: String },

    #[error("Invalid specification: {0}")]
    Validation(String),

    #[error("Fields not allowed in a specification: {}", .fields.join(", "))]
    UnknownFields { fields: Vec<String> },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Catalog operations over an injected [`SpecificationStore`].
///
/// Every operation issues independent store calls; two concurrent updates of
/// the same record are last-write-wins.
#[derive(Clone)]
pub struct SpecificationService {
    store: Arc<dyn SpecificationStore>,
}

impl SpecificationService {
    pub fn new(store: Arc<dyn SpecificationStore>) -> Self {
        Self { store }
    }

    /// Every stored specification, unfiltered, in insertion order.
    pub fn find_all(&self) -> Result<Vec<Specification>, SpecificationError> {
        Ok(self.store.find_all()?)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Specification, SpecificationError> {
        match self.store.find_by_id(id)? {
            Some(specification) => Ok(specification),
            None => {
                debug!("Specification {} not found", id);
                Err(SpecificationError::NotFound { id: id.to_string() })
            }
        }
    }

    /// Creates a record from the whitelisted fields of `payload`.
    ///
    /// Anything outside [`SPECIFICATION_FIELDS`](super::SPECIFICATION_FIELDS),
    /// including a caller-supplied `id` or timestamps, is discarded before
    /// validation.
    pub fn create_record(&self, payload: &Value) -> Result<Specification, SpecificationError> {
        let fields = whitelisted(as_object(payload)?);
        let details = validate(fields)?;

        let now = Utc::now();
        let specification = Specification {
            id: Uuid::new_v4().to_string(),
            details,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(&specification)?;

        info!("Created specification {}", specification.id);
        Ok(specification)
    }

    /// Permissive merge: every top-level key of `payload` is written over the
    /// stored document, which is then re-validated as a whole.
    ///
    /// Keys outside the schema pass the merge but are dropped by validation,
    /// so they never reach the store. `id` and the timestamps are not part of
    /// the document and cannot be overwritten. See
    /// [`update_whitelisted_by_id`](Self::update_whitelisted_by_id) for the
    /// strict variant.
    pub fn update_by_id(&self, id: &str, payload: &Value) -> Result<Specification, SpecificationError> {
        let specification = self.find_by_id(id)?;
        let patch = as_object(payload)?;
        self.merge_and_save(specification, patch)
    }

    /// Same as [`update_by_id`](Self::update_by_id), but a payload naming any
    /// field outside the schema is refused as a whole. A missing record is
    /// reported as `NotFound` before the payload is looked at.
    pub fn update_whitelisted_by_id(
        &self,
        id: &str,
        payload: &Value,
    ) -> Result<Specification, SpecificationError> {
        let specification = self.find_by_id(id)?;
        let patch = as_object(payload)?;
        let fields = unknown_fields(patch);
        if !fields.is_empty() {
            return Err(SpecificationError::UnknownFields { fields });
        }
        self.merge_and_save(specification, patch)
    }

    /// Removes the record and hands back its last stored state.
    pub fn delete_by_id(&self, id: &str) -> Result<Specification, SpecificationError> {
        let specification = self.find_by_id(id)?;
        if !self.store.delete_by_id(id)? {
            return Err(SpecificationError::NotFound { id: id.to_string() });
        }

        info!("Deleted specification {}", id);
        Ok(specification)
    }

    fn merge_and_save(
        &self,
        mut specification: Specification,
        patch: &Map<String, Value>,
    ) -> Result<Specification, SpecificationError> {
        let id = specification.id.clone();
        let mut document = to_document(&specification.details)?;
        shallow_merge(&mut document, patch);

        specification.details = validate(document)?;
        specification.updated_at = Utc::now().max(specification.updated_at);

        // The record may have been deleted between the load and this write.
        if !self.store.update_by_id(&specification)? {
            return Err(SpecificationError::NotFound { id });
        }

        info!("Updated specification {}", id);
        Ok(specification)
    }
}
