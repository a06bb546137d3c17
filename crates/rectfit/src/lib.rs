//! Largest axis-aligned rectangle inside a simple polygon.
//!
//! Pipeline
//! - `grid::build_axes`: coordinate lines from the vertices, optionally refined
//!   by midpoint / edge-crossing subdivision (`SubdivisionCfg`).
//! - `grid::classify`: every cell becomes `Interior`, `Boundary` or `Exterior`.
//! - `rect::largest_interior_rect`: histogram scan over the interior cells.
//!
//! The result is an approximation from below: the rectangle is a union of grid
//! cells, so finer recipes can only match or improve it.
//!
//! API Policy
//! - Entry points are `find`, `find_with_grid`, `try_find` and the two polygon
//!   checks. Everything else is exposed for diagnostics and benches.

pub mod api;
pub mod cfg;
pub mod error;
pub mod find;
pub mod geom;
pub mod grid;
pub mod rect;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::RectError;
pub use find::{find, find_with_grid, find_with_scratch, try_find, Inscribed, Scratch};
pub use geom::{is_clockwise, is_valid_polygon, validate_polygon};
pub use grid::{Cell, CellGrid, GridAxes, Strategy, SubdivisionCfg, SubdivisionStep};
pub use nalgebra::Vector2 as Vec2;
pub use rect::Rect;

#[cfg(test)]
mod tests_find;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::find::{find, find_with_grid, try_find, Inscribed};
    pub use crate::geom::{is_clockwise, is_valid_polygon, to_clockwise};
    pub use crate::grid::{Cell, Strategy, SubdivisionCfg};
    pub use crate::rect::Rect;
    pub use crate::sample::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use nalgebra::Vector2 as Vec2;
}
