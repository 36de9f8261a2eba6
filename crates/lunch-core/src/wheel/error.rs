use std::fmt;

/// Categories of rejected wheel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelErrorKind {
    /// Empty restaurant name or empty item list.
    InvalidInput,
    /// Fewer than two entries on the wheel.
    NotSpinnable,
}

impl fmt::Display for WheelErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelErrorKind::InvalidInput => write!(f, "invalid_input"),
            WheelErrorKind::NotSpinnable => write!(f, "not_spinnable"),
        }
    }
}

/// A rejected wheel operation. State is never mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelError {
    pub kind: WheelErrorKind,
    /// One-line message suitable for a user-facing warning.
    pub message: String,
}

impl WheelError {
    pub fn new(kind: WheelErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(WheelErrorKind::InvalidInput, message)
    }

    pub fn not_spinnable(entry_count: usize) -> Self {
        Self::new(
            WheelErrorKind::NotSpinnable,
            format!("need at least two restaurants to spin (have {entry_count})"),
        )
    }
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for WheelError {}

/// Result type for wheel operations.
pub type WheelResult<T> = std::result::Result<T, WheelError>;
