//! Spin engine and angle helpers.
//!
//! Angles are degrees in the chart's convention: slice `i` of `n` spans
//! `[rotation + i·s, rotation + (i+1)·s)` with `s = 360/n`, and the fixed
//! pointer sits at [`POINTER_ANGLE`]. The wheel rotates; the pointer never
//! moves.

use tracing::debug;

use super::error::{WheelError, WheelResult};
use super::random::RandomSource;

/// Chart angle of the fixed selection pointer.
pub const POINTER_ANGLE: f64 = 90.0;

/// Fewest cosmetic full turns added to a spin.
pub const EXTRA_TURNS_MIN: u32 = 4;

/// Most cosmetic full turns added to a spin.
pub const EXTRA_TURNS_MAX: u32 = 7;

const FULL_TURN: f64 = 360.0;

/// Width of one slice in degrees. A zero count is treated as one slice.
pub fn slice_angle(total_count: usize) -> f64 {
    FULL_TURN / total_count.max(1) as f64
}

/// Rotation (in `[0, 360)`) at which the center of slice `index` sits
/// under the pointer.
pub fn resting_angle(index: usize, total_count: usize) -> f64 {
    let slice = slice_angle(total_count);
    normalize(POINTER_ANGLE - index as f64 * slice - slice / 2.0)
}

/// Maps any angle into `[0, 360)`.
fn normalize(angle: f64) -> f64 {
    let angle = angle.rem_euclid(FULL_TURN);
    // A tiny negative input rounds up to a full turn.
    if angle >= FULL_TURN { 0.0 } else { angle }
}

/// Rotation shown before any spin: slice 0 under the pointer.
///
/// An empty wheel rests at the pointer angle itself.
pub fn initial_rotation(entry_count: usize) -> f64 {
    if entry_count == 0 {
        POINTER_ANGLE
    } else {
        resting_angle(0, entry_count)
    }
}

/// Slice drawn at chart `angle` when the wheel sits at `rotation`.
///
/// Returns `None` for an empty wheel.
pub fn slice_at_angle(angle: f64, rotation: f64, total_count: usize) -> Option<usize> {
    if total_count == 0 {
        return None;
    }
    let offset = (angle - rotation).rem_euclid(FULL_TURN);
    let index = (offset / slice_angle(total_count)).floor() as usize;
    Some(index.min(total_count - 1))
}

/// Slice currently under the fixed pointer.
pub fn slice_under_pointer(rotation: f64, total_count: usize) -> Option<usize> {
    slice_at_angle(POINTER_ANGLE, rotation, total_count)
}

/// Outcome of a single spin computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinResult {
    /// Index of the chosen slice (insertion order).
    pub index: usize,
    /// New cumulative rotation; always greater than the input rotation.
    pub rotation: f64,
    /// Minimal forward travel that lands on the chosen slice.
    pub forward_delta: f64,
    /// Cosmetic full turns included in `rotation`.
    pub extra_turns: u32,
}

/// Picks a slice uniformly at random and computes the forward-only rotation
/// that lands it under the pointer.
///
/// Pure: the caller stores the returned rotation and selection.
///
/// # Errors
/// Returns `NotSpinnable` when fewer than two entries are on the wheel.
pub fn spin(
    current_rotation: f64,
    entry_count: usize,
    rng: &mut dyn RandomSource,
) -> WheelResult<SpinResult> {
    if entry_count < 2 {
        return Err(WheelError::not_spinnable(entry_count));
    }

    let max_index = u32::try_from(entry_count - 1).unwrap_or(u32::MAX);
    let index = rng.next_in_range(0, max_index) as usize;

    let target = resting_angle(index, entry_count);
    let visual = normalize(current_rotation);
    let forward_delta = normalize(target - visual + FULL_TURN);

    let extra_turns = rng.next_in_range(EXTRA_TURNS_MIN, EXTRA_TURNS_MAX);
    let rotation = current_rotation + forward_delta + f64::from(extra_turns) * FULL_TURN;

    debug!(
        index,
        target, visual, forward_delta, extra_turns, rotation, "computed spin"
    );

    Ok(SpinResult {
        index,
        rotation,
        forward_delta,
        extra_turns,
    })
}
