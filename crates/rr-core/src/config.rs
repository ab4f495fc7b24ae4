//! The persisted configuration document.
//!
//! On disk the document is pretty-printed JSON with a fixed field order.
//! Keys this version does not know follow the known ones and are kept as-is.
//!
//! ```text
//! {
//!     "items": [ { "name": "Sword", "rarity": "Rare", "chance": 5 }, "Old Boot" ],
//!     "rarity_chances": {},
//!     "sounds": { "Rare": "sounds/rare.wav" },
//!     "sound_enabled": true,
//!     "multi_roll_chance": 10,
//!     "multi_roll_count": 2,
//!     "roll_sound": ""
//! }
//! ```
//!
//! Older documents may list items as bare strings. Reading goes through a
//! raw form first, and a single normalization pass turns every legacy
//! entry into a full [`Item`] before anything else sees it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::ItemCatalog;
use crate::draw::MultiRoll;
use crate::item::{Item, Rarity};

const UNNAMED_ITEM: &str = "Unnamed Item";

/// Root configuration document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    /// The weighted items to draw from.
    pub items: ItemCatalog,
    /// Opaque value carried through load and save untouched.
    pub rarity_chances: Value,
    /// Sound resource per rarity. Missing or empty means no sound.
    pub sounds: BTreeMap<Rarity, String>,
    /// Whether any sound keys are handed out with a draw result.
    pub sound_enabled: bool,
    /// Percent chance (0-100) that a draw triggers extra rolls.
    pub multi_roll_chance: u32,
    /// Number of extra rolls when multi-roll triggers.
    pub multi_roll_count: u32,
    /// Sound played on every draw. Empty means none.
    pub roll_sound: String,
    /// Top-level keys this version does not know about, kept for the next save.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            items: ItemCatalog::new(),
            rarity_chances: Value::Object(serde_json::Map::new()),
            sounds: BTreeMap::new(),
            sound_enabled: true,
            multi_roll_chance: 0,
            multi_roll_count: 1,
            roll_sound: String::new(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Configuration {
    /// Parse and normalize a persisted document.
    ///
    /// The error string describes what made the document unusable.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let raw: RawConfiguration = serde_json::from_str(text).map_err(|e| e.to_string())?;
        raw.normalize()
    }

    /// Serialize to the persisted form (4-space indented JSON).
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Configured sound for a rarity, ignoring blank entries.
    pub fn sound_for(&self, rarity: Rarity) -> Option<&str> {
        self.sounds
            .get(&rarity)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// The roll sound, if one is configured.
    pub fn roll_sound(&self) -> Option<&str> {
        Some(self.roll_sound.as_str()).filter(|s| !s.trim().is_empty())
    }

    /// Multi-roll settings as used by the draw.
    pub fn multi_roll(&self) -> MultiRoll {
        MultiRoll::new(self.multi_roll_chance, self.multi_roll_count)
    }
}

/// The document as it may appear on disk, before normalization.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfiguration {
    items: Vec<RawItem>,
    rarity_chances: Value,
    sounds: BTreeMap<Rarity, String>,
    sound_enabled: bool,
    multi_roll_chance: i64,
    multi_roll_count: i64,
    roll_sound: String,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
}

impl Default for RawConfiguration {
    fn default() -> Self {
        let defaults = Configuration::default();
        Self {
            items: Vec::new(),
            rarity_chances: defaults.rarity_chances,
            sounds: defaults.sounds,
            sound_enabled: defaults.sound_enabled,
            multi_roll_chance: i64::from(defaults.multi_roll_chance),
            multi_roll_count: i64::from(defaults.multi_roll_count),
            roll_sound: defaults.roll_sound,
            extra: defaults.extra,
        }
    }
}

/// A catalog entry in either its legacy or its structured form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Bare(String),
    Full(RawItemFields),
}

#[derive(Debug, Deserialize)]
struct RawItemFields {
    #[serde(default = "unnamed")]
    name: String,
    #[serde(default)]
    rarity: Rarity,
    #[serde(default = "default_chance")]
    chance: u32,
}

fn unnamed() -> String {
    UNNAMED_ITEM.to_string()
}

fn default_chance() -> u32 {
    1
}

impl RawItem {
    fn into_item(self) -> Item {
        let mut item = match self {
            Self::Bare(name) => Item::new(name),
            Self::Full(f) => Item::new(f.name).with_rarity(f.rarity).with_weight(f.chance),
        };
        if item.name.trim().is_empty() {
            item.name = unnamed();
        }
        item
    }
}

impl RawConfiguration {
    fn normalize(self) -> Result<Configuration, String> {
        let mut items = Vec::with_capacity(self.items.len());
        for (index, raw) in self.items.into_iter().enumerate() {
            let item = raw.into_item();
            item.validate()
                .map_err(|e| format!("items[{index}]: {e}"))?;
            items.push(item);
        }

        let multi_roll_chance = self.multi_roll_chance.clamp(0, 100);
        if multi_roll_chance != self.multi_roll_chance {
            log::warn!(
                "multi_roll_chance {} is outside 0-100, treating it as {multi_roll_chance}",
                self.multi_roll_chance
            );
        }
        let multi_roll_count = self.multi_roll_count.clamp(1, i64::from(u32::MAX));
        if multi_roll_count != self.multi_roll_count {
            log::warn!(
                "multi_roll_count {} is out of range, treating it as {multi_roll_count}",
                self.multi_roll_count
            );
        }

        Ok(Configuration {
            items: ItemCatalog::from_items(items),
            rarity_chances: self.rarity_chances,
            sounds: self.sounds,
            sound_enabled: self.sound_enabled,
            multi_roll_chance: u32::try_from(multi_roll_chance).unwrap_or(100),
            multi_roll_count: u32::try_from(multi_roll_count).unwrap_or(1),
            roll_sound: self.roll_sound,
            extra: self.extra,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document() {
        let json = Configuration::default().to_json().unwrap();
        insta::assert_snapshot!(json, @r#"
        {
            "items": [],
            "rarity_chances": {},
            "sounds": {},
            "sound_enabled": true,
            "multi_roll_chance": 0,
            "multi_roll_count": 1,
            "roll_sound": ""
        }
        "#);
    }

    #[test]
    fn bare_string_items_are_normalized() {
        let cfg = Configuration::from_json(r#"{"items": ["Old Boot", "Rusty Key"]}"#).unwrap();
        assert_eq!(cfg.items.len(), 2);
        let boot = cfg.items.get(0).unwrap();
        assert_eq!(boot.name, "Old Boot");
        assert_eq!(boot.rarity, Rarity::Common);
        assert_eq!(boot.weight, 1);
    }

    #[test]
    fn mixed_items() {
        let cfg = Configuration::from_json(
            r#"{"items": ["Pebble", {"name": "Crown", "rarity": "Legendary", "chance": 2}]}"#,
        )
        .unwrap();
        let crown = cfg.items.get(1).unwrap();
        assert_eq!(crown.rarity, Rarity::Legendary);
        assert_eq!(crown.weight, 2);
    }

    #[test]
    fn partial_item_fields_take_defaults() {
        let cfg = Configuration::from_json(r#"{"items": [{"name": "Gem"}, {"chance": 4}]}"#)
            .unwrap();
        assert_eq!(cfg.items.get(0).unwrap().weight, 1);
        assert_eq!(cfg.items.get(0).unwrap().rarity, Rarity::Common);
        assert_eq!(cfg.items.get(1).unwrap().name, UNNAMED_ITEM);
        assert_eq!(cfg.items.get(1).unwrap().weight, 4);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = Configuration::from_json("{}").unwrap();
        assert_eq!(cfg, Configuration::default());
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = Configuration::from_json(r#"{"items": [{"name": "Dust", "chance": 0}]}"#)
            .unwrap_err();
        assert!(err.contains("items[0]"), "{err}");
    }

    #[test]
    fn unknown_rarity_is_rejected() {
        assert!(Configuration::from_json(r#"{"sounds": {"Mythic": "a.wav"}}"#).is_err());
    }

    #[test]
    fn not_a_document() {
        assert!(Configuration::from_json("[1, 2, 3]").is_err());
        assert!(Configuration::from_json("{ not json").is_err());
    }

    #[test]
    fn out_of_range_roll_settings_are_clamped() {
        let cfg =
            Configuration::from_json(r#"{"multi_roll_chance": 250, "multi_roll_count": 0}"#)
                .unwrap();
        assert_eq!(cfg.multi_roll_chance, 100);
        assert_eq!(cfg.multi_roll_count, 1);

        let cfg = Configuration::from_json(
            r#"{"items": [{"name": "Sword", "rarity": "Rare", "chance": 3}],
                "multi_roll_chance": -5, "multi_roll_count": -2}"#,
        )
        .unwrap();
        assert_eq!(cfg.items.len(), 1);
        assert_eq!(cfg.multi_roll_chance, 0);
        assert_eq!(cfg.multi_roll_count, 1);
    }

    #[test]
    fn blank_item_names_become_unnamed() {
        let cfg = Configuration::from_json(
            r#"{"items": ["", {"name": "  ", "rarity": "Epic", "chance": 2}, "Torch"]}"#,
        )
        .unwrap();
        let names: Vec<_> = cfg.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, [UNNAMED_ITEM, UNNAMED_ITEM, "Torch"]);
        assert_eq!(cfg.items.get(1).unwrap().rarity, Rarity::Epic);
        assert_eq!(cfg.items.get(1).unwrap().weight, 2);
    }

    #[test]
    fn unknown_top_level_keys_survive_a_save() {
        let text = r#"{"items": ["Lamp"], "window_geometry": [100, 100, 600, 400], "theme": "dark"}"#;
        let cfg = Configuration::from_json(text).unwrap();
        assert_eq!(cfg.extra.get("theme"), Some(&serde_json::json!("dark")));

        let saved = cfg.to_json().unwrap();
        let again = Configuration::from_json(&saved).unwrap();
        assert_eq!(again, cfg);
        assert_eq!(again.to_json().unwrap(), saved);

        let value: Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(value["window_geometry"], serde_json::json!([100, 100, 600, 400]));
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn rarity_chances_pass_through() {
        let text = r#"{"rarity_chances": {"Rare": 12, "notes": ["kept", null]}}"#;
        let cfg = Configuration::from_json(text).unwrap();
        assert_eq!(
            cfg.rarity_chances,
            serde_json::json!({"Rare": 12, "notes": ["kept", null]})
        );
        let again = Configuration::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(again.rarity_chances, cfg.rarity_chances);
    }

    #[test]
    fn blank_sounds_count_as_unset() {
        let mut cfg = Configuration::default();
        cfg.sounds.insert(Rarity::Rare, "rare.wav".into());
        cfg.sounds.insert(Rarity::Epic, "".into());
        assert_eq!(cfg.sound_for(Rarity::Rare), Some("rare.wav"));
        assert_eq!(cfg.sound_for(Rarity::Epic), None);
        assert_eq!(cfg.sound_for(Rarity::Common), None);
        assert_eq!(cfg.roll_sound(), None);
    }

    #[test]
    fn sounds_serialize_in_tier_order() {
        let mut cfg = Configuration::default();
        cfg.sounds.insert(Rarity::Legendary, "l.wav".into());
        cfg.sounds.insert(Rarity::Common, "c.wav".into());
        let json = cfg.to_json().unwrap();
        let common = json.find("\"Common\"").unwrap();
        let legendary = json.find("\"Legendary\"").unwrap();
        assert!(common < legendary);
    }
}
