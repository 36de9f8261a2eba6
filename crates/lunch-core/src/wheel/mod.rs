//! The wheel: an ordered set of restaurants plus the rotation bookkeeping
//! that makes a spin land on the chosen slice.
//!
//! - `model.rs`: `WheelState` (entries, cumulative rotation, selection)
//! - `spin.rs`: the stateless spin engine and angle helpers
//! - `random.rs`: the randomness seam used by spins
//! - `error.rs`: error kinds for rejected operations

mod error;
mod model;
mod random;
mod spin;

pub use error::{WheelError, WheelErrorKind, WheelResult};
pub use model::{Entry, SpinOutcome, WheelState, WheelView, items_from_lines};
pub use random::{RandomSource, ScriptedRandom, ThreadRandom};
pub use spin::{
    EXTRA_TURNS_MAX, EXTRA_TURNS_MIN, POINTER_ANGLE, SpinResult, initial_rotation, resting_angle,
    slice_angle, slice_at_angle, slice_under_pointer, spin,
};
