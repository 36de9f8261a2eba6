//! Interactive wheel command.

use anyhow::Result;
use lunch_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    lunch_tui::run_interactive_wheel(config)
}
