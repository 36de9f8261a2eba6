//! Lists the configured restaurants in wheel order.

use anyhow::Result;
use lunch_core::config::Config;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let entries = config.default_entries();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No restaurants configured.");
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        let noun = if entry.items.len() == 1 { "item" } else { "items" };
        println!("{:>3}. {} ({} {noun})", i + 1, entry.name, entry.items.len());
    }
    Ok(())
}
