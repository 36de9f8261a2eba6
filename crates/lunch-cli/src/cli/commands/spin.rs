//! One-shot spin over the configured restaurants.

use anyhow::{Context, Result};
use lunch_core::config::Config;
use lunch_core::wheel::{ThreadRandom, WheelState};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SpinReport<'a> {
    index: usize,
    name: &'a str,
    items: &'a [String],
    rotation: f64,
}

pub fn run(config: &Config, json: bool) -> Result<()> {
    let mut wheel = WheelState::new(config.default_entries());
    let outcome = wheel
        .spin(&mut ThreadRandom::new())
        .context("spin the wheel")?;
    let entry = wheel
        .selected_entry()
        .context("picked restaurant is missing")?;

    if json {
        let report = SpinReport {
            index: outcome.index,
            name: &entry.name,
            items: &entry.items,
            rotation: outcome.rotation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Today's pick: {}", entry.name);
    println!();
    println!("Menu suggestions:");
    for item in &entry.items {
        println!("  • {item}");
    }
    Ok(())
}
