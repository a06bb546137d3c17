//! Tolerance and bound defaults (internal).
//!
//! Policy
//! - Fixed constants, no tolerance juggling at call sites. The classifier
//!   compares cells against vertex coordinates exactly, so vertex lines are
//!   never merged or moved; only refinement lines are snapped.

/// Snap radius for refinement lines, in units of `f64::EPSILON` relative to
/// `max(|v|, axis extent)`. A candidate line this close to an existing one is
/// dropped.
pub const SNAP_ULPS: f64 = 64.0;

/// Absolute snap radius for a candidate line `v` on an axis spanning `extent`.
#[inline]
pub fn snap_tol(extent: f64, v: f64) -> f64 {
    SNAP_ULPS * f64::EPSILON * v.abs().max(extent)
}

/// Upper bound on subdivision rounds in one recipe.
///
/// Midpoint rounds double the line count per axis; past a handful of rounds the
/// cost dominates and the area gain is negligible.
pub const MAX_ROUNDS: u32 = 5;
