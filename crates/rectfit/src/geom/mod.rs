//! Planar predicates and polygon checks.
//!
//! Purpose
//! - `predicates`: the three primitives the grid classifier and validators
//!   need (`cross`, `segments_intersect`, `perpendicular_side`).
//! - `polygon`: winding order, simplicity, canonical orientation.
//!
//! Conventions
//! - Points are `Vector2<f64>`; a polygon is an implicitly closed slice.
//! - "Clockwise" follows the screen (y-down) reading of the shoelace sign; in a
//!   y-up frame the interior of a canonical polygon lies left of every edge.
//! - Degenerate inputs are handled permissively (zero vectors, "no
//!   intersection"), never by panicking.

mod polygon;
mod predicates;

pub use polygon::{
    is_clockwise, is_valid_polygon, shoelace_sum, signed_area, to_clockwise, validate_polygon,
};
pub use predicates::{cross, exterior_normal, perpendicular_side, segments_intersect};
