use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rectfit::prelude::*;
use rectfit::api::{validate_polygon, RectError, MAX_ROUNDS};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{load_polygon, write_polygon_csv};
use provenance::{current_git_rev, write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "rectfit")]
#[command(about = "Largest axis-aligned rectangle inside a simple polygon")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one polygon and print (or write) the rectangle as JSON
    Find {
        #[arg(long)]
        input: PathBuf,
        /// Subdivision recipe, e.g. "CC", "MMC" or "none"
        #[arg(long, default_value = "CC")]
        mode: String,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Include axes and cell classification in the output
        #[arg(long)]
        grid: bool,
        /// Solve even if the polygon fails validation
        #[arg(long)]
        force: bool,
    },
    /// Report validity and winding of a polygon
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Write a random star-shaped polygon as CSV
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0.3)]
        angle_jitter: f64,
        #[arg(long, default_value_t = 0.5)]
        radial_jitter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct RectOut {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl From<Rect> for RectOut {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

#[derive(Serialize)]
struct GridOut {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Row strings, top row first.
    cells: Vec<String>,
}

#[derive(Serialize)]
struct FindOut {
    rect: RectOut,
    area: f64,
    mode: String,
    vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(flatten)]
    grid: Option<GridOut>,
}

#[derive(Serialize)]
struct CheckOut {
    valid: bool,
    clockwise: bool,
    reason: Option<String>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Find {
            input,
            mode,
            out,
            grid,
            force,
        } => find_cmd(&input, &mode, out.as_deref(), grid, force, cmd.tag),
        Action::Check { input } => check_cmd(&input),
        Action::Sample {
            seed,
            index,
            vertices,
            angle_jitter,
            radial_jitter,
            out,
        } => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(vertices),
                angle_jitter_frac: angle_jitter,
                radial_jitter,
                ..RadialCfg::default()
            };
            sample_cmd(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn find_cmd(
    input: &Path,
    mode: &str,
    out: Option<&Path>,
    grid: bool,
    force: bool,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(input = %input.display(), mode, grid, force, tag = ?tag, "find");
    let cfg: SubdivisionCfg = mode
        .parse()
        .with_context(|| format!("parsing --mode {mode:?}"))?;
    let pts = load_polygon(input)?;
    if let Err(e) = validate_polygon(&pts) {
        if !force {
            return Err(e)
                .with_context(|| format!("{} (use --force to solve anyway)", input.display()));
        }
        tracing::warn!(error = %e, "solving invalid polygon");
    }

    let solved = find_with_grid(&pts, &cfg);
    let report = FindOut {
        rect: solved.rect.into(),
        area: solved.rect.area(),
        mode: cfg.to_string(),
        vertices: pts.len(),
        tag: tag.clone(),
        grid: grid.then(|| GridOut {
            xs: solved.axes.xs.clone(),
            ys: solved.axes.ys.clone(),
            cells: solved.cells.rows_top_down(),
        }),
    };
    let body = serde_json::to_string_pretty(&report)?;
    match out {
        Some(path) => {
            write_output(path, body.as_bytes())?;
            let params = json!({
                "input": input.to_string_lossy(),
                "mode": cfg.to_string(),
                "grid": grid,
                "force": force,
            });
            write_sidecar(path, Provenance::new(params, tag))?;
            tracing::info!(out = %path.display(), area = report.area, "result written");
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn check_cmd(input: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "check");
    let pts = load_polygon(input)?;
    let reason = match validate_polygon(&pts) {
        Ok(()) => None,
        Err(RectError::InvalidPolygon { reason }) => Some(reason),
        Err(e) => Some(e.to_string()),
    };
    let report = CheckOut {
        valid: reason.is_none(),
        clockwise: is_clockwise(&pts),
        reason,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn sample_cmd(cfg: RadialCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, out = %out.display(), "sample");
    if out.extension().and_then(|e| e.to_str()) != Some("csv") {
        bail!("--out must be a .csv path, got {}", out.display());
    }
    let pts = draw_polygon_radial(cfg, tok);
    write_polygon_csv(out, &pts)?;
    let params = json!({
        "seed": tok.seed,
        "index": tok.index,
        "vertices": pts.len(),
        "angle_jitter_frac": cfg.angle_jitter_frac,
        "radial_jitter": cfg.radial_jitter,
    });
    write_sidecar(out, Provenance::new(params, tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "lib_version": rectfit::VERSION,
        "max_rounds": MAX_ROUNDS,
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}
