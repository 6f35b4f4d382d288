use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product's technical profile as stored by the catalog.
///
/// The record is keyed by an opaque, store-generated `id`. Its body is the
/// caller-controlled [`SpecificationDetails`], flattened so the wire form is a
/// single flat JSON object:
///
/// ```json
/// { "id": "…", "origin": "Vietnam", "ram": 8, …, "created_at": "…", "updated_at": "…" }
/// ```
///
/// The link to the product itself is kept by the caller; nothing here
/// references a product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub id: String,
    #[serde(flatten)]
    pub details: SpecificationDetails,
    /// Set once when the record is created.
    pub created_at: DateTime<Utc>,
    /// Bumped on every successful update.
    pub updated_at: DateTime<Utc>,
}

/// Every field a caller may set on a specification.
///
/// All fields are mandatory except `expandable_memory`, which defaults to
/// `false`. Adding a field here is a schema migration: older stored documents
/// will fail to load unless the new field carries a `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificationDetails {
    pub origin: String,
    pub release_date: String,
    /// Months.
    pub warranty: u32,

    pub dimensions: String,
    pub weight: String,
    pub water_resistance: String,
    pub material: String,

    pub cpu_version: String,
    pub cpu_type: String,
    pub cpu_cores: u32,
    /// GB.
    pub ram: u32,
    pub gpu: String,
    /// GB.
    pub storage: u32,
    #[serde(default)]
    pub expandable_memory: bool,

    pub screen_size: String,
    pub screen_type: String,
    pub screen_resolution: String,
    pub glass_material: String,
    pub touch_type: String,
    pub brightness: String,
    pub contrast_ratio: String,

    pub rear_camera: String,
    pub video_quality: Vec<String>,
    pub selfie_camera: SelfieCamera,

    pub sensors: Vec<String>,
    pub security: Security,

    /// Number of SIM slots.
    pub sim: u32,
    /// Free-form technology → description map, e.g. `"wifi" → "Wi-Fi 6"`.
    pub connectivity: BTreeMap<String, String>,

    pub battery: Battery,
    pub more_info: MoreInfo,

    pub os: String,
    pub os_version: String,

    pub accessories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfieCamera {
    pub resolution: String,
    pub video_quality: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub password_unlock: bool,
    pub face_unlock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battery {
    /// Cell chemistry, e.g. `Li-Po`. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub life: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoreInfo {
    pub fast_charging: bool,
    pub wireless_charging: bool,
}

impl SpecificationDetails {
    /// Names of the required text fields that hold an empty or
    /// whitespace-only value. A required string must carry a value.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        let text_fields: [(&'static str, &str); 22] = [
            ("origin", &self.origin),
            ("release_date", &self.release_date),
            ("dimensions", &self.dimensions),
            ("weight", &self.weight),
            ("water_resistance", &self.water_resistance),
            ("material", &self.material),
            ("cpu_version", &self.cpu_version),
            ("cpu_type", &self.cpu_type),
            ("gpu", &self.gpu),
            ("screen_size", &self.screen_size),
            ("screen_type", &self.screen_type),
            ("screen_resolution", &self.screen_resolution),
            ("glass_material", &self.glass_material),
            ("touch_type", &self.touch_type),
            ("brightness", &self.brightness),
            ("contrast_ratio", &self.contrast_ratio),
            ("rear_camera", &self.rear_camera),
            ("selfie_camera.resolution", &self.selfie_camera.resolution),
            ("battery.type", &self.battery.kind),
            ("battery.life", &self.battery.life),
            ("os", &self.os),
            ("os_version", &self.os_version),
        ];

        text_fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
