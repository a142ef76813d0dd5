use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::attrs;
use crate::types::AttributeKey;

/// Raw nested animal record as delivered by a source.
///
/// Every field is optional; unknown keys at any level are preserved in the
/// flattened `extra` maps so a loaded snapshot re-saves without data loss.
/// The core never mutates raw records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawAnimal {
    /// Common name, used as the card title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Taxonomy substructure (scientific name et al.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<Taxonomy>,
    /// Characteristics substructure (diet, type, color, skin type, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Characteristics>,
    /// Location names in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    /// Source fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawAnimal {
    /// Label used in diagnostics: the name when present, else `position`.
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{position}"))
    }
}

/// Nested taxonomy data of a raw record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Binomial scientific name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Taxonomy fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Nested characteristics data of a raw record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Characteristics {
    /// Diet description, e.g. `Omnivore`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    /// Generic group, e.g. `Mammal`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Camel-joined color list, e.g. `BlackWhiteTan`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Skin/coat category, e.g. `Fur`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<String>,
    /// Characteristic fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flat, insertion-ordered attribute map for one animal.
///
/// Keys are drawn from [`crate::constants::attrs`] and inserted in the fixed
/// display order. Absent source values are omitted entirely; the map never
/// holds an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimalProfile {
    attributes: IndexMap<AttributeKey, String>,
}

impl AnimalProfile {
    /// Insert `value` under `key` unless it is empty.
    pub(crate) fn insert(&mut self, key: AttributeKey, value: Option<String>) {
        if let Some(value) = value
            && !value.is_empty()
        {
            self.attributes.insert(key, value);
        }
    }

    /// Attribute value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Card title, when the source record carried a name.
    pub fn name(&self) -> Option<&str> {
        self.get(attrs::NAME)
    }

    /// Skin/coat category, when present.
    pub fn skin_type(&self) -> Option<&str> {
        self.get(attrs::SKIN_TYPE)
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of present attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True when no attribute is present.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_animal_parses_nested_record() {
        let raw: RawAnimal = serde_json::from_str(
            r#"{
                "name": "Fox",
                "taxonomy": {"kingdom": "Animalia", "scientific_name": "Vulpes vulpes"},
                "locations": ["Asia", "Europe"],
                "characteristics": {"diet": "Omnivore", "type": "Mammal", "skin_type": "Fur"}
            }"#,
        )
        .unwrap();

        assert_eq!(raw.name.as_deref(), Some("Fox"));
        assert_eq!(
            raw.taxonomy.as_ref().unwrap().scientific_name.as_deref(),
            Some("Vulpes vulpes")
        );
        assert_eq!(raw.locations, vec!["Asia", "Europe"]);
        let characteristics = raw.characteristics.as_ref().unwrap();
        assert_eq!(characteristics.kind.as_deref(), Some("Mammal"));
        assert_eq!(characteristics.skin_type.as_deref(), Some("Fur"));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let input = r#"{"name":"Fox","taxonomy":{"kingdom":"Animalia"},"characteristics":{"lifespan":"2 years"}}"#;
        let raw: RawAnimal = serde_json::from_str(input).unwrap();
        let json = serde_json::to_value(&raw).unwrap();

        assert_eq!(json["taxonomy"]["kingdom"], "Animalia");
        assert_eq!(json["characteristics"]["lifespan"], "2 years");
    }

    #[test]
    fn profile_skips_empty_values_and_keeps_order() {
        let mut profile = AnimalProfile::default();
        profile.insert(attrs::NAME, Some("Fox".into()));
        profile.insert(attrs::DIET, Some(String::new()));
        profile.insert(attrs::SKIN_TYPE, Some("Fur".into()));
        profile.insert(attrs::COLOR, None);

        assert_eq!(profile.len(), 2);
        assert_eq!(profile.get(attrs::DIET), None);
        let keys: Vec<_> = profile.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![attrs::NAME, attrs::SKIN_TYPE]);
    }

    #[test]
    fn label_falls_back_to_position() {
        let unnamed = RawAnimal::default();
        assert_eq!(unnamed.label(3), "#3");
        let named: RawAnimal = serde_json::from_str(r#"{"name":"Fox"}"#).unwrap();
        assert_eq!(named.label(3), "Fox");
    }
}
