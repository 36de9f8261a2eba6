//! State mutations requested by overlays.
//!
//! Overlays only see `&TuiState`; they describe changes here and the
//! reducer applies them.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateMutation {
    /// Add a restaurant, or replace its items if the name exists.
    SaveRestaurant { name: String, items: Vec<String> },
}
