//! Print the classified grid for a random polygon as text.
//!
//! Usage:
//!   cargo run -p rectfit --example ascii_grid -- [recipe] [seed]
//!
//! `I` interior, `B` boundary, `E` exterior, `#` interior cells covered by the
//! answer. Rows are printed top row first.

use rectfit::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let recipe = args.next().unwrap_or_else(|| "CC".to_string());
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg: SubdivisionCfg = match recipe.parse() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("usage: ascii_grid [recipe like MMC] [seed]");
            return;
        }
    };

    let pts = draw_polygon_radial(RadialCfg::default(), ReplayToken { seed, index: 0 });
    let out = find_with_grid(&pts, &cfg);
    let (w, h) = (out.cells.width(), out.cells.height());
    for y in (0..h).rev() {
        let row: String = (0..w)
            .map(|x| {
                let cx = 0.5 * (out.axes.xs[x] + out.axes.xs[x + 1]);
                let cy = 0.5 * (out.axes.ys[y] + out.axes.ys[y + 1]);
                if out.rect.contains_eps(Vec2::new(cx, cy), 0.0) {
                    '#'
                } else {
                    out.cells.get(x, y).code()
                }
            })
            .collect();
        println!("{row}");
    }
    println!(
        "recipe={cfg} grid={w}x{h} rect=({:.4}, {:.4}, {:.4}, {:.4}) area={:.4}",
        out.rect.x,
        out.rect.y,
        out.rect.width,
        out.rect.height,
        out.rect.area()
    );
}
