//! Entry points: polygon in, largest inscribed rectangle out.
//!
//! - `find`: permissive, never fails. Canonicalizes winding, truncates
//!   over-long recipes, returns a zero rectangle for degenerate input.
//! - `try_find`: validates polygon and recipe first.
//! - `find_with_grid`: also returns the axes and classified cells.
//! - `find_with_scratch`: `find` with caller-owned buffers for repeated calls.

use nalgebra::Vector2;

use crate::error::RectError;
use crate::geom::{to_clockwise, validate_polygon};
use crate::grid::{build_axes_into, classify, CellGrid, GridAxes, SubdivisionCfg};
use crate::rect::{largest_interior_rect_with, HistogramScratch, Rect};

/// Result of `find_with_grid`: the rectangle plus the grid that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Inscribed {
    pub rect: Rect,
    pub axes: GridAxes,
    pub cells: CellGrid,
}

/// Reusable buffers for repeated solves.
///
/// Every buffer is cleared before use, so a `Scratch` carries no state from
/// one call to the next.
#[derive(Clone, Debug, Default)]
pub struct Scratch {
    axes: GridAxes,
    pending: GridAxes,
    histogram: HistogramScratch,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Largest axis-aligned rectangle inside `points`.
pub fn find(points: &[Vector2<f64>], cfg: &SubdivisionCfg) -> Rect {
    find_with_scratch(points, cfg, &mut Scratch::default())
}

/// `find` reusing `scratch` across calls.
pub fn find_with_scratch(
    points: &[Vector2<f64>],
    cfg: &SubdivisionCfg,
    scratch: &mut Scratch,
) -> Rect {
    solve(points, cfg, scratch).map_or_else(Rect::default, |(rect, _)| rect)
}

/// Validate polygon and recipe, then `find`.
pub fn try_find(points: &[Vector2<f64>], cfg: &SubdivisionCfg) -> Result<Rect, RectError> {
    validate_polygon(points)?;
    cfg.validate()?;
    Ok(find(points, cfg))
}

/// `find` plus the grid axes and cell classification, for diagnostics.
///
/// Degenerate input yields a zero rectangle and an empty grid.
pub fn find_with_grid(points: &[Vector2<f64>], cfg: &SubdivisionCfg) -> Inscribed {
    let mut scratch = Scratch::default();
    match solve(points, cfg, &mut scratch) {
        Some((rect, cells)) => Inscribed {
            rect,
            axes: scratch.axes,
            cells,
        },
        None => Inscribed {
            rect: Rect::default(),
            axes: GridAxes::default(),
            cells: CellGrid::new(0, 0),
        },
    }
}

/// Shared pipeline. `None` when there is no 2D extent to work with.
fn solve(
    points: &[Vector2<f64>],
    cfg: &SubdivisionCfg,
    scratch: &mut Scratch,
) -> Option<(Rect, CellGrid)> {
    if points.len() < 3 {
        tracing::debug!(vertices = points.len(), "too few vertices");
        return None;
    }
    let truncated;
    let cfg = if cfg.validate().is_ok() {
        cfg
    } else {
        truncated = cfg.truncated();
        tracing::warn!(requested = %cfg, used = %truncated, "recipe truncated");
        &truncated
    };
    let polygon = to_clockwise(points);

    build_axes_into(&polygon, cfg, &mut scratch.axes, &mut scratch.pending);
    if scratch.axes.cell_count() == 0 {
        tracing::debug!(vertices = points.len(), "polygon has no 2D extent");
        return None;
    }
    let cells = classify(&polygon, &scratch.axes);
    let rect = largest_interior_rect_with(&scratch.axes, &cells, &mut scratch.histogram);
    tracing::debug!(
        vertices = points.len(),
        recipe = %cfg,
        xs = scratch.axes.xs.len(),
        ys = scratch.axes.ys.len(),
        area = rect.area(),
        "find"
    );
    Some((rect, cells))
}
