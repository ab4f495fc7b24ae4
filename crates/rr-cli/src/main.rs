//! CLI frontend for Rarity Roller: manage weighted items and draw from them.

mod audio;
mod commands;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use rr_core::Rarity;

#[derive(Parser)]
#[command(
    name = "rr",
    about = "Rarity Roller — weighted random draws with rarity tiers",
    version,
    propagate_version = true
)]
struct Cli {
    /// Configuration file to read and write
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configuration file with defaults if it does not exist
    Init,

    /// Draw a weighted random item
    Draw {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds between "Rolling..." and the reveal (0 reveals at once)
        #[arg(long, default_value = "1000")]
        delay_ms: u64,
    },

    /// Manage the item catalog
    #[command(subcommand)]
    Items(ItemCommand),

    /// Manage sound settings
    #[command(subcommand)]
    Sound(SoundCommand),

    /// Configure extra rolls after a draw
    MultiRoll {
        /// Percent chance that extra rolls happen
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
        chance: Option<u32>,

        /// Number of extra rolls when triggered
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,
    },

    /// Show all settings
    Show,
}

#[derive(Subcommand)]
enum ItemCommand {
    /// List items with their rarity, weight and share of the total
    List,

    /// Add a Common item with weight 1
    Add {
        /// Item name
        name: String,
    },

    /// Edit an item (fields not given keep their current value)
    Edit {
        /// Item number as shown by `rr items list`
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New rarity (Common, Uncommon, Rare, Epic, Legendary)
        #[arg(long)]
        rarity: Option<Rarity>,

        /// New weight
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        weight: Option<u32>,
    },

    /// Delete an item
    Delete {
        /// Item number as shown by `rr items list`
        index: usize,
    },
}

#[derive(Subcommand)]
enum SoundCommand {
    /// Hand out sounds with draw results
    Enable,

    /// Stop handing out sounds
    Disable,

    /// Assign a sound file to a rarity
    Set {
        /// Rarity tier
        rarity: Rarity,

        /// Sound file path
        path: String,
    },

    /// Remove the sound assigned to a rarity
    Clear {
        /// Rarity tier
        rarity: Rarity,
    },

    /// Set the sound played on every draw (omit PATH to clear it)
    Roll {
        /// Sound file path
        path: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let config = cli.config.as_path();
    let result = match cli.command {
        Commands::Init => commands::init::run(config),
        Commands::Draw { seed, delay_ms } => commands::draw::run(
            config,
            seed,
            Duration::from_millis(delay_ms),
            &audio::AnnouncePlayback,
        ),
        Commands::Items(cmd) => match cmd {
            ItemCommand::List => commands::items::list(config),
            ItemCommand::Add { name } => commands::items::add(config, &name),
            ItemCommand::Edit {
                index,
                name,
                rarity,
                weight,
            } => commands::items::edit(config, index, name, rarity, weight),
            ItemCommand::Delete { index } => commands::items::delete(config, index),
        },
        Commands::Sound(cmd) => match cmd {
            SoundCommand::Enable => commands::sound::set_enabled(config, true),
            SoundCommand::Disable => commands::sound::set_enabled(config, false),
            SoundCommand::Set { rarity, path } => commands::sound::set(config, rarity, &path),
            SoundCommand::Clear { rarity } => commands::sound::clear(config, rarity),
            SoundCommand::Roll { path } => commands::sound::roll(config, path.as_deref()),
        },
        Commands::MultiRoll { chance, count } => commands::multi_roll::run(config, chance, count),
        Commands::Show => commands::show::run(config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
