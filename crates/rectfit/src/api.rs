//! Curated surface for callers (viewers, CLI, benches).
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! move without notice.

// Solving
pub use crate::find::{find, find_with_grid, find_with_scratch, try_find, Inscribed, Scratch};
pub use crate::rect::Rect;
// Polygon checks
pub use crate::geom::{is_clockwise, is_valid_polygon, signed_area, to_clockwise, validate_polygon};
// Grid diagnostics
pub use crate::grid::{
    build_axes, classify, Cell, CellGrid, GridAxes, Strategy, SubdivisionCfg, SubdivisionStep,
};
pub use crate::rect::largest_interior_rect;
// Random polygons
pub use crate::sample::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
// Limits
pub use crate::cfg::MAX_ROUNDS;
pub use crate::error::RectError;
