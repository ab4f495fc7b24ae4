use std::path::Path;

use rr_core::Rarity;

pub fn set_enabled(path: &Path, enabled: bool) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    store
        .set_sound_enabled(enabled)
        .map_err(|e| e.to_string())?;
    println!("Sound {}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub fn set(path: &Path, rarity: Rarity, file: &str) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    store
        .set_sound_file(rarity, file)
        .map_err(|e| e.to_string())?;
    println!("{} sound set to {file}", super::paint(rarity.name(), rarity));
    Ok(())
}

pub fn clear(path: &Path, rarity: Rarity) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    store.clear_sound_file(rarity).map_err(|e| e.to_string())?;
    println!("{} sound cleared", super::paint(rarity.name(), rarity));
    Ok(())
}

pub fn roll(path: &Path, file: Option<&str>) -> Result<(), String> {
    let mut store = super::open_store(path)?;
    store
        .set_roll_sound(file.unwrap_or_default())
        .map_err(|e| e.to_string())?;
    match store.roll_sound() {
        Some(file) => println!("Roll sound set to {file}"),
        None => println!("Roll sound cleared"),
    }
    Ok(())
}
