//! Grid line construction and refinement.

use nalgebra::Vector2;

use super::recipe::{Strategy, SubdivisionCfg};
use super::types::GridAxes;
use crate::cfg::snap_tol;

/// Grid lines for `points` refined by every round of `cfg`.
///
/// The caller is expected to pass a recipe within `MAX_ROUNDS`; `find`
/// truncates longer ones before getting here.
pub fn build_axes(points: &[Vector2<f64>], cfg: &SubdivisionCfg) -> GridAxes {
    let mut axes = GridAxes::default();
    let mut pending = GridAxes::default();
    build_axes_into(points, cfg, &mut axes, &mut pending);
    axes
}

/// Same as `build_axes`, writing into reusable buffers.
///
/// `pending` holds candidate lines within a pass; both buffers are
/// cleared first, so their previous contents never leak into the result.
pub fn build_axes_into(
    points: &[Vector2<f64>],
    cfg: &SubdivisionCfg,
    axes: &mut GridAxes,
    pending: &mut GridAxes,
) {
    axes.clear();
    pending.clear();
    axes.xs.extend(points.iter().map(|p| p.x));
    axes.ys.extend(points.iter().map(|p| p.y));
    sort_exact(&mut axes.xs);
    sort_exact(&mut axes.ys);

    for strategy in cfg.rounds() {
        match strategy {
            Strategy::Midpoint => {
                collect_midpoints(&axes.xs, &mut pending.xs);
                collect_midpoints(&axes.ys, &mut pending.ys);
            }
            Strategy::Crossing => collect_crossings(points, axes, pending),
        }
        merge_lines(&mut axes.xs, &mut pending.xs);
        merge_lines(&mut axes.ys, &mut pending.ys);
    }
}

/// Vertex coordinates: sort and drop exact repeats only.
fn sort_exact(axis: &mut Vec<f64>) {
    axis.sort_unstable_by(f64::total_cmp);
    axis.dedup();
}

/// Move `pending` into `axis`, dropping candidates within `snap_tol` of a
/// line already on the axis or of a smaller accepted candidate.
///
/// Post: every line present on entry is still present, bit for bit, and the
/// axis is strictly increasing. `pending` is left empty.
fn merge_lines(axis: &mut Vec<f64>, pending: &mut Vec<f64>) {
    let (Some(&lo), Some(&hi)) = (axis.first(), axis.last()) else {
        pending.clear();
        return;
    };
    let extent = hi - lo;
    pending.sort_unstable_by(f64::total_cmp);
    pending.retain(|&v| {
        let tol = snap_tol(extent, v);
        let i = axis.partition_point(|&a| a < v);
        let near_above = axis.get(i).is_some_and(|&a| a - v <= tol);
        let near_below = i > 0 && v - axis[i - 1] <= tol;
        !(near_above || near_below)
    });
    pending.dedup_by(|later, kept| *later - *kept <= snap_tol(extent, *later));
    axis.append(pending);
    axis.sort_unstable_by(f64::total_cmp);
}

/// Midpoint of every pair of adjacent lines.
fn collect_midpoints(axis: &[f64], out: &mut Vec<f64>) {
    out.extend(axis.windows(2).map(|w| 0.5 * (w[0] + w[1])));
}

/// For every edge, the y where it crosses each x-line strictly inside its
/// x-extent (and symmetrically for y-lines) goes into `pending`.
fn collect_crossings(points: &[Vector2<f64>], axes: &GridAxes, pending: &mut GridAxes) {
    let n = points.len();
    for i in 0..n {
        let s = points[i];
        let e = points[(i + 1) % n];
        for &x in &axes.xs {
            if (x - s.x) * (x - e.x) < 0.0 {
                let t = (x - s.x) / (e.x - s.x);
                pending.ys.push(s.y + (e.y - s.y) * t);
            }
        }
        for &y in &axes.ys {
            if (y - s.y) * (y - e.y) < 0.0 {
                let t = (y - s.y) / (e.y - s.y);
                pending.xs.push(s.x + (e.x - s.x) * t);
            }
        }
    }
}
