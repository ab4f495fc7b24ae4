//! Weighted items and their rarity tiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RrError, RrResult};

/// Rarity tier attached to an item, ordered from most to least common.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    /// Everyday finds. Also the tier for entries stored without one.
    #[default]
    Common,
    /// Slightly better than average.
    Uncommon,
    /// Hard to come by.
    Rare,
    /// Very hard to come by.
    Epic,
    /// The top tier.
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    /// Display name, identical to the persisted form.
    pub fn name(self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }

    /// RGB colour used when a result of this tier is shown.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Common => (0, 0, 0),
            Self::Uncommon => (30, 144, 255),
            Self::Rare => (75, 0, 130),
            Self::Epic => (148, 0, 211),
            Self::Legendary => (255, 165, 0),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!("unknown rarity '{wanted}' (expected Common, Uncommon, Rare, Epic or Legendary)")
            })
    }
}

/// One weighted entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Display name. Not required to be unique.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Relative selection weight, persisted as `chance`.
    #[serde(rename = "chance")]
    pub weight: u32,
}

impl Item {
    /// Create a Common item with weight 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity: Rarity::Common,
            weight: 1,
        }
    }

    /// Set the rarity tier.
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the selection weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Check that the item may take part in a draw.
    pub fn validate(&self) -> RrResult<()> {
        if self.name.trim().is_empty() {
            return Err(RrError::InvalidItem("name must not be empty".into()));
        }
        if self.weight == 0 {
            return Err(RrError::InvalidItem(format!(
                "'{}' has weight 0, weights start at 1",
                self.name
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.rarity)
    }
}
