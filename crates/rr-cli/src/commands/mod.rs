pub mod draw;
pub mod init;
pub mod items;
pub mod multi_roll;
pub mod show;
pub mod sound;

use std::path::Path;

use colored::{ColoredString, Colorize};
use rr_core::{ConfigStore, Rarity};

/// Open the configuration for a command that will write it back.
///
/// A corrupt file is an error here so it never gets silently replaced.
fn open_store(path: &Path) -> Result<ConfigStore, String> {
    ConfigStore::open(path).map_err(|e| e.to_string())
}

/// Open the configuration for a read-only command, falling back to defaults.
fn open_store_lenient(path: &Path) -> ConfigStore {
    ConfigStore::open_or_default(path)
}

/// Paint text in the colour of its rarity tier.
fn paint(text: &str, rarity: Rarity) -> ColoredString {
    match rarity {
        // Common is black in the palette; keep the terminal's own foreground.
        Rarity::Common => text.bold(),
        other => {
            let (r, g, b) = other.color();
            text.truecolor(r, g, b).bold()
        }
    }
}

/// Convert a 1-based item number from the command line into a catalog index.
fn item_index(store: &ConfigStore, number: usize) -> Result<usize, String> {
    let len = store.config().items.len();
    if number == 0 || number > len {
        return Err(format!("no item #{number} (catalog has {len} items)"));
    }
    Ok(number - 1)
}
