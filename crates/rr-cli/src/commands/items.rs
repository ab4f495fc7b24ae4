use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rr_core::{Item, Rarity};

pub fn list(path: &Path) -> Result<(), String> {
    let store = super::open_store_lenient(path);
    let items = &store.config().items;

    if items.is_empty() {
        println!("  No items configured.");
        return Ok(());
    }

    let total = items.total_weight() as f64;
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Rarity", "Weight", "Share"]);

    for (i, item) in items.iter().enumerate() {
        let share = 100.0 * f64::from(item.weight) / total;
        table.add_row(vec![
            (i + 1).to_string(),
            item.name.clone(),
            item.rarity.to_string(),
            item.weight.to_string(),
            format!("{share:.1}%"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items, total weight {}", items.len(), items.total_weight());

    Ok(())
}

pub fn add(path: &Path, name: &str) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    let added = store
        .catalog_mut()
        .add(name.trim())
        .map_err(|e| e.to_string())?
        .clone();
    store.save().map_err(|e| e.to_string())?;

    println!(
        "Added #{}: {} (weight {})",
        store.config().items.len(),
        super::paint(&added.to_string(), added.rarity),
        added.weight
    );
    Ok(())
}

pub fn edit(
    path: &Path,
    number: usize,
    name: Option<String>,
    rarity: Option<Rarity>,
    weight: Option<u32>,
) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    let index = super::item_index(&store, number)?;

    // Start from the current values, as an edit form would.
    let current = store.config().items.all()[index].clone();
    let updated = Item {
        name: name.map(|n| n.trim().to_string()).unwrap_or(current.name),
        rarity: rarity.unwrap_or(current.rarity),
        weight: weight.unwrap_or(current.weight),
    };

    store
        .catalog_mut()
        .edit(index, updated.clone())
        .map_err(|e| e.to_string())?;
    store.save().map_err(|e| e.to_string())?;

    println!(
        "Updated #{number}: {} (weight {})",
        super::paint(&updated.to_string(), updated.rarity),
        updated.weight
    );
    Ok(())
}

pub fn delete(path: &Path, number: usize) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    let index = super::item_index(&store, number)?;
    let removed = store
        .catalog_mut()
        .delete(index)
        .map_err(|e| e.to_string())?;
    store.save().map_err(|e| e.to_string())?;

    println!("Deleted #{number}: {removed}");
    Ok(())
}
