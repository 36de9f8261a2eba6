//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── wheel: WheelState        (entries, rotation, last pick)
//! │   ├── animation: Option<SpinAnimation>
//! │   ├── cursor: usize            (highlighted sidebar row)
//! │   └── notice: Option<Notice>   (last success/warning message)
//! └── overlay: Option<Overlay>     (add/edit form)
//! ```
//!
//! Overlays live beside `TuiState` so their key handlers can read the
//! session while the reducer holds `&mut` to the overlay.

use lunch_core::config::Config;
use lunch_core::labels::LabelOptions;
use lunch_core::wheel::{Entry, RandomSource, ThreadRandom, WheelState};

use crate::animation::SpinAnimation;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_random(config, Box::new(ThreadRandom::new()))
    }

    /// Creates state with an explicit randomness source.
    pub fn with_random(config: Config, rng: Box<dyn RandomSource>) -> Self {
        Self {
            tui: TuiState::new(config, rng),
            overlay: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Info,
}

/// One-line feedback shown under the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Session wheel. Dropped with the session; nothing is persisted.
    pub wheel: WheelState,
    pub config: Config,
    /// Running spin animation, if any.
    pub animation: Option<SpinAnimation>,
    /// Highlighted sidebar row.
    pub cursor: usize,
    pub notice: Option<Notice>,
    pub rng: Box<dyn RandomSource>,
}

impl TuiState {
    pub fn new(config: Config, rng: Box<dyn RandomSource>) -> Self {
        let wheel = WheelState::new(config.default_entries());
        Self {
            should_quit: false,
            wheel,
            config,
            animation: None,
            cursor: 0,
            notice: None,
            rng,
        }
    }

    /// Rotation to draw: the animated value mid-spin, else the stored one.
    pub fn display_rotation(&self) -> f64 {
        self.animation
            .as_ref()
            .map_or(self.wheel.rotation(), SpinAnimation::current_rotation)
    }

    pub fn is_spinning(&self) -> bool {
        self.animation.is_some()
    }

    pub fn highlighted(&self) -> Option<&Entry> {
        self.wheel.entries().get(self.cursor)
    }

    /// Keeps the cursor on a valid row after the entry set changes.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.wheel.len().saturating_sub(1));
    }

    pub fn label_options(&self) -> LabelOptions {
        self.config.label_options()
    }
}
