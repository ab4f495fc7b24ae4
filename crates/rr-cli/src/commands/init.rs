use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let existed = path.exists();
    let store = super::open_store(path)?;

    if existed {
        println!(
            "Configuration at {} is valid ({} items)",
            path.display(),
            store.config().items.len()
        );
    } else {
        println!("Created configuration at {}", path.display());
        println!();
        println!("Get started:");
        println!("  rr items add <name>   # Add an item");
        println!("  rr items list         # Show the catalog");
        println!("  rr draw               # Draw an item");
    }

    Ok(())
}
