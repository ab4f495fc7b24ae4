use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use rr_core::{DrawPresenter, RrError};

use crate::audio::AudioPlayback;

/// Draw an item and reveal it after `delay`.
///
/// The result is fixed before "Rolling..." is printed; the delay only
/// postpones showing it.
pub fn run(
    path: &Path,
    seed: Option<u64>,
    delay: Duration,
    audio: &dyn AudioPlayback,
) -> Result<(), String> {
    let store = super::open_store_lenient(path);
    let mut presenter = match seed {
        Some(seed) => DrawPresenter::seeded(seed),
        None => DrawPresenter::new(),
    };

    let result = match presenter.perform_draw(store.config()) {
        Ok(result) => result,
        Err(RrError::NoItems) => {
            println!(
                "{}",
                "No items available to generate. Add one with `rr items add <name>`.".yellow()
            );
            return Ok(());
        }
        Err(e) => return Err(e.to_string()),
    };

    if let Some(sound) = &result.roll_sound {
        audio.play(sound);
    }

    if !delay.is_zero() {
        println!("Rolling...");
        io::stdout().flush().map_err(|e| e.to_string())?;
        thread::sleep(delay);
    }

    println!(
        "Result: {}",
        super::paint(&result.display_text(), result.rarity())
    );

    if !result.extras.is_empty() {
        println!(
            "  {} {} bonus draw{}:",
            "Multi-roll!".bold(),
            result.extras.len(),
            if result.extras.len() == 1 { "" } else { "s" }
        );
        for item in &result.extras {
            println!("    + {}", super::paint(&item.to_string(), item.rarity));
        }
    }

    if let Some(sound) = &result.sound_key {
        audio.play(sound);
    }

    Ok(())
}
