//! Non-uniform grid over the polygon and per-cell classification.
//!
//! Purpose
//! - `build`: coordinate lines from the vertices plus optional refinement
//!   rounds (`SubdivisionCfg`).
//! - `classify`: per-edge directional tests, then a flood fill from the outer
//!   ring, leaving every cell `Interior`, `Boundary` or `Exterior`.
//!
//! Why this design
//! - Every vertex coordinate is a grid line, so each edge's bounding box is an
//!   exact union of cells and one corner test per cell decides its side.
//! - Refinement only ever adds lines; a refined grid classifies a superset of
//!   the interior region, so the extracted area never shrinks.
//!
//! Code cross-refs: `geom::{perpendicular_side, exterior_normal}`, `rect`.

mod build;
mod classify;
mod recipe;
mod types;

pub use build::{build_axes, build_axes_into};
pub use classify::{classify, EdgeDir};
pub use recipe::{Strategy, SubdivisionCfg, SubdivisionStep};
pub use types::{Cell, CellGrid, GridAxes};
