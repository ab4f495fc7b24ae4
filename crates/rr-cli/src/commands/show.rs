use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rr_core::Rarity;

pub fn run(path: &Path) -> Result<(), String> {
    let store = super::open_store_lenient(path);
    let config = store.config();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Setting", "Value"]);

    table.add_row(vec![
        "Items".to_string(),
        format!(
            "{} (total weight {})",
            config.items.len(),
            config.items.total_weight()
        ),
    ]);
    table.add_row(vec![
        "Sound".to_string(),
        if config.sound_enabled { "on" } else { "off" }.to_string(),
    ]);
    for rarity in Rarity::ALL {
        table.add_row(vec![
            format!("{rarity} sound"),
            config.sound_for(rarity).unwrap_or("—").to_string(),
        ]);
    }
    table.add_row(vec![
        "Roll sound".to_string(),
        config.roll_sound().unwrap_or("—").to_string(),
    ]);
    table.add_row(vec![
        "Multi-roll chance".to_string(),
        format!("{}%", config.multi_roll_chance),
    ]);
    table.add_row(vec![
        "Multi-roll count".to_string(),
        config.multi_roll_count.to_string(),
    ]);

    println!("  {}", store.path().display());
    println!("{table}");
    Ok(())
}
