//! Events consumed by the reducer.

use std::time::Duration;

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Frame tick carrying the time since the previous tick.
    Tick { elapsed: Duration },
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
}
