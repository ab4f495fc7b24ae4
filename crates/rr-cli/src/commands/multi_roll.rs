use std::path::Path;

pub fn run(path: &Path, chance: Option<u32>, count: Option<u32>) -> Result<(), String> {
    let mut store = super::open_store(path)?;

    if let Some(chance) = chance {
        store
            .set_multi_roll_chance(chance)
            .map_err(|e| e.to_string())?;
    }
    if let Some(count) = count {
        store
            .set_multi_roll_count(count)
            .map_err(|e| e.to_string())?;
    }

    let multi = store.config().multi_roll();
    println!(
        "Multi-roll: {}% chance of {} extra roll{}",
        multi.chance,
        multi.count,
        if multi.count == 1 { "" } else { "s" }
    );
    Ok(())
}
