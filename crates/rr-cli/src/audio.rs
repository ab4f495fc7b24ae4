//! Audio playback seam.
//!
//! The core only names the sound resources that belong to a draw. Decoding
//! and output are left to whatever implements [`AudioPlayback`].

use std::path::Path;

use colored::Colorize;

/// Something that can play a sound resource.
pub trait AudioPlayback {
    /// Play the resource at `path`.
    fn play(&self, path: &str);
}

/// Announces sounds on stdout instead of decoding them.
pub struct AnnouncePlayback;

impl AudioPlayback for AnnouncePlayback {
    fn play(&self, path: &str) {
        if !Path::new(path).exists() {
            log::warn!("sound file {path} does not exist");
        }
        log::debug!("playing {path}");
        println!("  {}", format!("♪ {path}").dimmed());
    }
}
