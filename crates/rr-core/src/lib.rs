//! Core of Rarity Roller.
//!
//! Provides the weighted item catalog, the JSON configuration store with
//! legacy-entry normalization, the cumulative weighted draw with multi-roll
//! support, and a presenter that turns a configuration into a draw result
//! plus the sound keys a front-end should play.

pub mod catalog;
pub mod config;
pub mod draw;
pub mod error;
pub mod item;
pub mod presenter;
pub mod store;

pub use catalog::ItemCatalog;
pub use config::Configuration;
pub use draw::{MultiRoll, draw, pick_index, roll_extras};
pub use error::{RrError, RrResult};
pub use item::{Item, Rarity};
pub use presenter::{DrawPresenter, DrawResult};
pub use store::{ConfigStore, write_config};
