//! Cell classification: per-edge corner tests followed by an exterior flood
//! fill.
//!
//! Rules
//! - An edge tests a cell when the cell lies inside the edge's bounding box, or
//!   when a horizontal / vertical edge lies exactly on one of the cell's sides.
//! - The tested point is the cell corner furthest along the edge's exterior
//!   normal (`EdgeDir::critical_corner`). If that corner is strictly outside,
//!   the cell is `Boundary`; otherwise it is `Interior` unless some other edge
//!   already made it `Boundary`.
//! - Cells no edge touched are settled by the flood fill: reachable from the
//!   outer ring means `Exterior`, enclosed means `Interior`.
//!
//! Limitations
//! - The rules are local to one edge. A cell that lies entirely outside the
//!   polygon but inside a single edge's bounding box, on that edge's interior
//!   side, and in no other edge's box, is marked `Interior`. This shows up on
//!   the outer ring next to obtuse corners (thin triangles mostly), where the
//!   answer can then poke outside the polygon.

use nalgebra::Vector2;

use super::types::{Cell, CellGrid, GridAxes};
use crate::geom::{exterior_normal, perpendicular_side};

/// Direction class of a directed edge by the signs of `(dx, dy)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDir {
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
    Right,
}

impl EdgeDir {
    /// `None` for zero-length edges.
    pub fn of(p0: Vector2<f64>, p1: Vector2<f64>) -> Option<Self> {
        use std::cmp::Ordering::*;
        let dx = p1.x.partial_cmp(&p0.x)?;
        let dy = p1.y.partial_cmp(&p0.y)?;
        Some(match (dx, dy) {
            (Greater, Greater) => EdgeDir::UpRight,
            (Equal, Greater) => EdgeDir::Up,
            (Less, Greater) => EdgeDir::UpLeft,
            (Less, Equal) => EdgeDir::Left,
            (Less, Less) => EdgeDir::DownLeft,
            (Equal, Less) => EdgeDir::Down,
            (Greater, Less) => EdgeDir::DownRight,
            (Greater, Equal) => EdgeDir::Right,
            (Equal, Equal) => return None,
        })
    }

    /// Corner of the cell `[x0, x1] × [y0, y1]` furthest toward the exterior
    /// (right-hand) side of an edge with this direction.
    #[inline]
    pub fn critical_corner(self, x0: f64, x1: f64, y0: f64, y1: f64) -> Vector2<f64> {
        match self {
            EdgeDir::UpRight | EdgeDir::Up => Vector2::new(x1, y0),
            EdgeDir::UpLeft | EdgeDir::Left => Vector2::new(x1, y1),
            EdgeDir::DownLeft | EdgeDir::Down => Vector2::new(x0, y1),
            EdgeDir::DownRight | EdgeDir::Right => Vector2::new(x0, y0),
        }
    }
}

/// Classify every cell of `axes` against the clockwise polygon `points`.
///
/// Post: no cell is `Unmarked`.
pub fn classify(points: &[Vector2<f64>], axes: &GridAxes) -> CellGrid {
    let mut grid = CellGrid::new(axes.width(), axes.height());
    if grid.width() == 0 || grid.height() == 0 {
        return grid;
    }
    let n = points.len();
    for i in 0..n {
        mark_edge(&mut grid, axes, points[i], points[(i + 1) % n]);
    }
    let passes = flood_exterior(&mut grid);
    tracing::trace!(passes, "flood fill settled");
    grid
}

fn mark_edge(grid: &mut CellGrid, axes: &GridAxes, p0: Vector2<f64>, p1: Vector2<f64>) {
    let Some(dir) = EdgeDir::of(p0, p1) else {
        return;
    };
    let normal = exterior_normal(p0, p1);
    let (min_x, max_x) = (p0.x.min(p1.x), p0.x.max(p1.x));
    let (min_y, max_y) = (p0.y.min(p1.y), p0.y.max(p1.y));
    let horizontal = p0.y == p1.y;
    let vertical = p0.x == p1.x;

    // Only cells within one line of the edge's box can match.
    let xr = cell_range(&axes.xs, min_x, max_x);
    let yr = cell_range(&axes.ys, min_y, max_y);
    for x in xr {
        let (x0, x1) = (axes.xs[x], axes.xs[x + 1]);
        for y in yr.clone() {
            let (y0, y1) = (axes.ys[y], axes.ys[y + 1]);
            let inside_box = min_x <= x0 && min_y <= y0 && max_x >= x1 && max_y >= y1;
            let on_row_side =
                horizontal && min_x <= x0 && max_x >= x1 && (min_y == y0 || max_y == y1);
            let on_col_side =
                vertical && (min_x == x0 || max_x == x1) && min_y <= y0 && max_y >= y1;
            if !(inside_box || on_row_side || on_col_side) {
                continue;
            }
            let corner = dir.critical_corner(x0, x1, y0, y1);
            let side = perpendicular_side(p0, p1, corner);
            let cell = &mut grid.cells[(x, y)];
            if normal.dot(&side) <= 0.0 {
                cell.mark_boundary();
            } else {
                cell.mark_interior();
            }
        }
    }
}

/// Cell indices whose interval may touch `[lo, hi]`, widened by one cell on
/// each side for edges lying on a grid line.
fn cell_range(lines: &[f64], lo: f64, hi: f64) -> std::ops::Range<usize> {
    let cells = lines.len().saturating_sub(1);
    let start = lines.partition_point(|&v| v < lo).saturating_sub(1);
    let end = lines.partition_point(|&v| v <= hi).min(cells);
    start..end.max(start)
}

/// Settle unmarked cells. Returns the number of fill passes.
fn flood_exterior(grid: &mut CellGrid) -> usize {
    let (w, h) = (grid.width(), grid.height());
    let cells = &mut grid.cells;

    // 1. outer ring
    for x in 0..w {
        for y in [0, h - 1] {
            if cells[(x, y)] == Cell::Unmarked {
                cells[(x, y)] = Cell::Exterior;
            }
        }
    }
    for y in 0..h {
        for x in [0, w - 1] {
            if cells[(x, y)] == Cell::Unmarked {
                cells[(x, y)] = Cell::Exterior;
            }
        }
    }

    // 2. grow the exterior to a fixed point
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for x in 1..w.saturating_sub(1) {
            for y in 1..h.saturating_sub(1) {
                if cells[(x, y)] != Cell::Unmarked {
                    continue;
                }
                let touches_exterior = cells[(x - 1, y)] == Cell::Exterior
                    || cells[(x + 1, y)] == Cell::Exterior
                    || cells[(x, y - 1)] == Cell::Exterior
                    || cells[(x, y + 1)] == Cell::Exterior;
                if touches_exterior {
                    cells[(x, y)] = Cell::Exterior;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    // 3. whatever is left is enclosed
    for c in cells.iter_mut() {
        if *c == Cell::Unmarked {
            *c = Cell::Interior;
        }
    }
    passes
}
