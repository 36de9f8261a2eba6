//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes,
//! which keeps the reducer free of terminal I/O.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
