//! Frontend Models
//!
//! Data structures matching the curator backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// A Home Assistant config entry selected for exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationEntry {
    pub entry_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

/// A config entry offered by Home Assistant as a selection candidate.
///
/// Only lives inside the add-integration modal; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableIntegration {
    pub entry_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl AvailableIntegration {
    /// Label shown in the modal's select control.
    pub fn label(&self) -> String {
        match (&self.title, &self.domain) {
            (Some(title), Some(domain)) => format!("{} ({})", title, domain),
            (Some(title), None) => title.clone(),
            (None, Some(domain)) => format!("{} ({})", self.entry_id, domain),
            (None, None) => self.entry_id.clone(),
        }
    }
}

/// Suppressed entity/device IDs, in server-returned order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlacklistState {
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub devices: Vec<String>,
}

/// Force-included entity IDs, in server-returned order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhitelistState {
    #[serde(default)]
    pub entities: Vec<String>,
}

/// Read-only entity snapshot from the last ingest or load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub entity_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub area_id: Option<String>,
    #[serde(default)]
    pub integration_id: Option<String>,
}

impl EntityRecord {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.original_name.as_deref())
            .unwrap_or(&self.entity_id)
    }
}

/// Read-only device snapshot from the last ingest or load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub name_by_user: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub area_id: Option<String>,
}

impl DeviceRecord {
    pub fn display_name(&self) -> &str {
        self.name_by_user
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Payload of GET /api/entities and POST /api/entities/ingest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    #[serde(default)]
    pub entities: Vec<EntityRecord>,
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

/// Blacklist discriminator: whether an ID names an entity or a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Entity,
    Device,
}

impl TargetType {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Entity => "entity",
            TargetType::Device => "device",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "entity" => Some(TargetType::Entity),
            "device" => Some(TargetType::Device),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_record_optional_fields() {
        let record: EntityRecord =
            serde_json::from_str(r#"{"entity_id":"sensor.kitchen_temp"}"#).unwrap();
        assert_eq!(record.entity_id, "sensor.kitchen_temp");
        assert_eq!(record.name, None);
        assert_eq!(record.display_name(), "sensor.kitchen_temp");
    }

    #[test]
    fn test_entity_display_name_prefers_name() {
        let record: EntityRecord = serde_json::from_str(
            r#"{"entity_id":"sensor.kitchen_temp","name":"Kitchen","original_name":"Temp"}"#,
        )
        .unwrap();
        assert_eq!(record.display_name(), "Kitchen");
    }

    #[test]
    fn test_device_display_name_prefers_user_name() {
        let device: DeviceRecord = serde_json::from_str(
            r#"{"id":"abc123","name":"Hue Bridge","name_by_user":"Hallway Bridge"}"#,
        )
        .unwrap();
        assert_eq!(device.display_name(), "Hallway Bridge");
    }

    #[test]
    fn test_blacklist_missing_fields_default_empty() {
        let blacklist: BlacklistState =
            serde_json::from_str(r#"{"entities":["light.a"]}"#).unwrap();
        assert_eq!(blacklist.entities, vec!["light.a"]);
        assert!(blacklist.devices.is_empty());
    }

    #[test]
    fn test_target_type_round_trip() {
        assert_eq!(TargetType::parse("entity"), Some(TargetType::Entity));
        assert_eq!(TargetType::parse("device"), Some(TargetType::Device));
        assert_eq!(TargetType::parse("group"), None);
        assert_eq!(TargetType::Device.as_str(), "device");
    }

    #[test]
    fn test_available_integration_label() {
        let full: AvailableIntegration =
            serde_json::from_str(r#"{"entry_id":"e1","title":"Philips Hue","domain":"hue"}"#)
                .unwrap();
        assert_eq!(full.label(), "Philips Hue (hue)");

        let bare: AvailableIntegration = serde_json::from_str(r#"{"entry_id":"e2"}"#).unwrap();
        assert_eq!(bare.label(), "e2");
    }
}
