//! Turning a configuration into a finished draw.
//!
//! The presenter performs the draw immediately and returns everything a
//! front-end needs to show it: the winning item, any multi-roll extras, and
//! the sound resources to play. Reveal delays and audio playback belong to
//! the caller.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Configuration;
use crate::draw::{draw, roll_extras};
use crate::error::{RrError, RrResult};
use crate::item::{Item, Rarity};

/// Outcome of one draw request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// The primary pick.
    pub primary: Item,
    /// Extra picks from a triggered multi-roll, in draw order.
    pub extras: Vec<Item>,
    /// Sound for the primary pick's rarity, if sound is on and one is set.
    pub sound_key: Option<String>,
    /// Sound for every draw, if sound is on and one is set.
    pub roll_sound: Option<String>,
}

impl DrawResult {
    /// `"<name> (<rarity>)"` for the primary pick.
    pub fn display_text(&self) -> String {
        self.primary.to_string()
    }

    /// Rarity of the primary pick.
    pub fn rarity(&self) -> Rarity {
        self.primary.rarity
    }

    /// Primary pick followed by the extras.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        std::iter::once(&self.primary).chain(self.extras.iter())
    }
}

impl std::fmt::Display for DrawResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Result: {}", self.display_text())
    }
}

/// Performs draws against a configuration with its own RNG.
pub struct DrawPresenter {
    rng: StdRng,
}

impl DrawPresenter {
    /// Create a presenter seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a presenter with a fixed seed for reproducible draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw from `config`'s items and resolve the sounds to play.
    ///
    /// Fails with [`RrError::NoItems`] when there is nothing to draw.
    pub fn perform_draw(&mut self, config: &Configuration) -> RrResult<DrawResult> {
        if config.items.is_empty() {
            return Err(RrError::NoItems);
        }

        let entries: Vec<(&Item, u32)> = config.items.iter().map(|i| (i, i.weight)).collect();
        let primary = (*draw(&entries, &mut self.rng)?).clone();
        let extras: Vec<Item> = roll_extras(&entries, config.multi_roll(), &mut self.rng)?
            .into_iter()
            .map(|item| (*item).clone())
            .collect();

        let (sound_key, roll_sound) = if config.sound_enabled {
            (
                config.sound_for(primary.rarity).map(str::to_string),
                config.roll_sound().map(str::to_string),
            )
        } else {
            (None, None)
        };

        log::debug!(
            "drew {primary} from {} items ({} extras)",
            entries.len(),
            extras.len()
        );

        Ok(DrawResult {
            primary,
            extras,
            sound_key,
            roll_sound,
        })
    }
}

impl Default for DrawPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(items: &[Item]) -> Configuration {
        let mut cfg = Configuration::default();
        for item in items {
            cfg.items.push(item.clone()).unwrap();
        }
        cfg
    }

    #[test]
    fn empty_catalog_is_no_items() {
        let mut presenter = DrawPresenter::seeded(1);
        let err = presenter.perform_draw(&Configuration::default()).unwrap_err();
        assert!(matches!(err, RrError::NoItems));
    }

    #[test]
    fn single_item_is_always_drawn() {
        let crown = Item::new("Crown").with_rarity(Rarity::Legendary).with_weight(9);
        let cfg = config_with(std::slice::from_ref(&crown));
        let mut presenter = DrawPresenter::seeded(5);
        for _ in 0..100 {
            assert_eq!(presenter.perform_draw(&cfg).unwrap().primary, crown);
        }
    }

    #[test]
    fn rarity_sound_resolved() {
        let mut cfg = config_with(&[Item::new("Gem").with_rarity(Rarity::Rare)]);
        cfg.sounds.insert(Rarity::Rare, "rare.wav".into());
        cfg.sounds.insert(Rarity::Common, "common.wav".into());
        cfg.roll_sound = "drum.wav".into();

        let result = DrawPresenter::seeded(2).perform_draw(&cfg).unwrap();
        assert_eq!(result.sound_key.as_deref(), Some("rare.wav"));
        assert_eq!(result.roll_sound.as_deref(), Some("drum.wav"));
    }

    #[test]
    fn missing_sound_is_absent() {
        let mut cfg = config_with(&[Item::new("Gem").with_rarity(Rarity::Epic)]);
        cfg.sounds.insert(Rarity::Rare, "rare.wav".into());
        let result = DrawPresenter::seeded(2).perform_draw(&cfg).unwrap();
        assert_eq!(result.sound_key, None);
        assert_eq!(result.roll_sound, None);
    }

    #[test]
    fn sound_disabled_gates_everything() {
        let mut cfg = config_with(&[Item::new("Gem").with_rarity(Rarity::Rare)]);
        for rarity in Rarity::ALL {
            cfg.sounds.insert(rarity, format!("{rarity}.wav"));
        }
        cfg.roll_sound = "drum.wav".into();
        cfg.sound_enabled = false;

        let mut presenter = DrawPresenter::seeded(4);
        for _ in 0..20 {
            let result = presenter.perform_draw(&cfg).unwrap();
            assert_eq!(result.sound_key, None);
            assert_eq!(result.roll_sound, None);
        }
    }

    #[test]
    fn multi_roll_extras() {
        let mut cfg = config_with(&[Item::new("A"), Item::new("B").with_weight(3)]);
        cfg.multi_roll_chance = 100;
        cfg.multi_roll_count = 3;
        let mut presenter = DrawPresenter::seeded(8);
        for _ in 0..50 {
            let result = presenter.perform_draw(&cfg).unwrap();
            assert_eq!(result.extras.len(), 3);
            assert_eq!(result.all_items().count(), 4);
        }

        cfg.multi_roll_chance = 0;
        for _ in 0..50 {
            assert!(presenter.perform_draw(&cfg).unwrap().extras.is_empty());
        }
    }

    #[test]
    fn display_text() {
        let cfg = config_with(&[Item::new("Sword").with_rarity(Rarity::Uncommon)]);
        let result = DrawPresenter::seeded(0).perform_draw(&cfg).unwrap();
        assert_eq!(result.display_text(), "Sword (Uncommon)");
        assert_eq!(result.to_string(), "Result: Sword (Uncommon)");
        assert_eq!(result.rarity(), Rarity::Uncommon);
    }

    #[test]
    fn same_seed_same_results() {
        let cfg = config_with(&[
            Item::new("A").with_weight(1),
            Item::new("B").with_weight(2),
            Item::new("C").with_weight(7),
        ]);
        let mut p1 = DrawPresenter::seeded(77);
        let mut p2 = DrawPresenter::seeded(77);
        for _ in 0..30 {
            assert_eq!(
                p1.perform_draw(&cfg).unwrap(),
                p2.perform_draw(&cfg).unwrap()
            );
        }
    }
}
