//! Full-screen lunch wheel TUI.

pub mod animation;
pub mod effects;
pub mod events;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod wheel_widget;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use lunch_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive wheel until the user quits.
pub fn run_interactive_wheel(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive wheel requires a terminal.\n\
             Use `lunch spin` for a non-interactive pick."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()
}
