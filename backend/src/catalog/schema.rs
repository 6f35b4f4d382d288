use super::SpecificationError;
use crate::store::StoreError;
use catalog_common::model::specification::SpecificationDetails;
use serde_json::{Map, Value};

/// Top-level fields a caller may write. `create_record` copies exactly these
/// from its payload; the whitelisted update rejects anything else.
pub const SPECIFICATION_FIELDS: &[&str] = &[
    "origin",
    "release_date",
    "warranty",
    "dimensions",
    "weight",
    "water_resistance",
    "material",
    "cpu_version",
    "cpu_type",
    "cpu_cores",
    "ram",
    "gpu",
    "storage",
    "expandable_memory",
    "screen_size",
    "screen_type",
    "screen_resolution",
    "glass_material",
    "touch_type",
    "brightness",
    "contrast_ratio",
    "rear_camera",
    "video_quality",
    "selfie_camera",
    "sensors",
    "security",
    "sim",
    "connectivity",
    "battery",
    "more_info",
    "os",
    "os_version",
    "accessories",
];

pub(crate) fn as_object(payload: &Value) -> Result<&Map<String, Value>, SpecificationError> {
    payload
        .as_object()
        .ok_or_else(|| SpecificationError::Validation("payload must be a JSON object".to_string()))
}

/// Copies only whitelisted fields out of `payload`.
pub(crate) fn whitelisted(payload: &Map<String, Value>) -> Map<String, Value> {
    payload
        .iter()
        .filter(|(key, _)| SPECIFICATION_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Keys of `payload` that are not writable fields.
pub(crate) fn unknown_fields(payload: &Map<String, Value>) -> Vec<String> {
    payload
        .keys()
        .filter(|key| !SPECIFICATION_FIELDS.contains(&key.as_str()))
        .cloned()
        .collect()
}

/// Overwrites every top-level key of `patch` onto `document`. Nested objects
/// are replaced whole, not merged.
pub(crate) fn shallow_merge(document: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (key, value) in patch {
        document.insert(key.clone(), value.clone());
    }
}

/// The raw document form of stored details, ready to be merged into.
/// Failing here is a fault of the stored data, never of the caller.
pub(crate) fn to_document(details: &SpecificationDetails) -> Result<Map<String, Value>, StoreError> {
    let value = serde_json::to_value(details)?;
    Ok(serde_json::from_value(value)?)
}

/// Builds typed details out of a raw document and enforces the schema.
/// Keys that are not part of the schema are dropped.
pub(crate) fn validate(document: Map<String, Value>) -> Result<SpecificationDetails, SpecificationError> {
    let details: SpecificationDetails = serde_json::from_value(Value::Object(document))
        .map_err(|e| SpecificationError::Validation(e.to_string()))?;

    let blank = details.blank_fields();
    if !blank.is_empty() {
        return Err(SpecificationError::Validation(format!(
            "required fields must not be empty: {}",
            blank.join(", ")
        )));
    }

    Ok(details)
}
