//! Core lunch wheel library (wheel model, spin engine, config, logging).

pub mod config;
pub mod defaults;
pub mod labels;
pub mod logging;
pub mod wheel;
