//! Polygon files: CSV / Parquet (columns `x`, `y`) through polars, or JSON.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use rectfit::Vec2;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PolygonDoc {
    Bare(Vec<[f64; 2]>),
    Wrapped { points: Vec<[f64; 2]> },
}

/// Load an ordered vertex list; the format follows the file extension.
pub fn load_polygon(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let pts = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            load_frame(lf)?
        }
        "parquet" => load_frame(LazyFrame::scan_parquet(path, ScanArgsParquet::default())?)?,
        other => bail!("unsupported polygon format {other:?} (want csv, parquet or json)"),
    };
    tracing::info!(path = %path.display(), vertices = pts.len(), "polygon loaded");
    Ok(pts)
}

fn load_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: PolygonDoc =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let pts = match doc {
        PolygonDoc::Bare(p) | PolygonDoc::Wrapped { points: p } => p,
    };
    Ok(pts.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

fn load_frame(lf: LazyFrame) -> Result<Vec<Vec2<f64>>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(i, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("row {i} has a missing coordinate"),
        })
        .collect()
}

/// Write vertices as a two-column CSV (`x`, `y`).
pub fn write_polygon_csv(path: &Path, pts: &[Vec2<f64>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut df = df!(
        "x" => pts.iter().map(|p| p.x).collect::<Vec<f64>>(),
        "y" => pts.iter().map(|p| p.y).collect::<Vec<f64>>()
    )?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_bare_and_wrapped() {
        let dir = tempdir().unwrap();
        let bare = dir.path().join("bare.json");
        std::fs::write(&bare, "[[0,0],[2,0],[2,1]]").unwrap();
        let pts = load_polygon(&bare).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Vec2::new(2.0, 0.0));

        let wrapped = dir.path().join("wrapped.json");
        std::fs::write(&wrapped, r#"{"points": [[0.5, 1.5], [3, 4], [0, 4]]}"#).unwrap();
        let pts = load_polygon(&wrapped).unwrap();
        assert_eq!(pts[0], Vec2::new(0.5, 1.5));
    }

    #[test]
    fn csv_round_trip_through_polars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.csv");
        let pts = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 1.5),
            Vec2::new(0.0, 1.5),
        ];
        write_polygon_csv(&path, &pts).unwrap();
        assert_eq!(load_polygon(&path).unwrap(), pts);
    }

    #[test]
    fn csv_integer_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "x,y\n0,0\n3,0\n3,2\n").unwrap();
        let pts = load_polygon(&path).unwrap();
        assert_eq!(pts[2], Vec2::new(3.0, 2.0));
    }

    #[test]
    fn unknown_extension_rejected() {
        let err = load_polygon(Path::new("poly.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported polygon format"));
    }
}
