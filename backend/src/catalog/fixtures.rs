use catalog_common::model::specification::SpecificationDetails;
use serde_json::{json, Value};

/// A complete creation payload; `expandable_memory` is left out on purpose.
pub(crate) fn sample_payload() -> Value {
    json!({
        "origin": "Vietnam",
        "release_date": "2024-09",
        "warranty": 12,
        "dimensions": "146.7 x 71.5 x 7.8 mm",
        "weight": "171 g",
        "water_resistance": "IP68",
        "material": "Aluminium",
        "cpu_version": "Snapdragon 8 Gen 3",
        "cpu_type": "Octa-core",
        "cpu_cores": 6,
        "ram": 8,
        "gpu": "Adreno 750",
        "storage": 256,
        "screen_size": "6.2 inch",
        "screen_type": "Dynamic AMOLED 2X",
        "screen_resolution": "1080 x 2340",
        "glass_material": "Gorilla Glass Victus 2",
        "touch_type": "Capacitive multi-touch",
        "brightness": "2600 nits",
        "contrast_ratio": "1,000,000:1",
        "rear_camera": "50 MP + 12 MP + 10 MP",
        "video_quality": ["8K@30fps", "4K@60fps"],
        "selfie_camera": { "resolution": "12 MP", "video_quality": ["4K@60fps"] },
        "sensors": ["fingerprint", "accelerometer", "gyro"],
        "security": { "password_unlock": true, "face_unlock": true },
        "sim": 2,
        "connectivity": { "wifi": "Wi-Fi 7", "bluetooth": "5.3", "nfc": "Yes", "gps": "GPS, GLONASS" },
        "battery": { "type": "Li-Ion", "life": "29 hours" },
        "more_info": { "fast_charging": true, "wireless_charging": true },
        "os": "Android",
        "os_version": "14",
        "accessories": ["USB-C cable", "SIM ejector"]
    })
}

pub(crate) fn sample_details() -> SpecificationDetails {
    serde_json::from_value(sample_payload()).expect("sample payload matches the schema")
}
