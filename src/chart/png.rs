use super::ChartHandle;
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_SIZE: (u32, u32) = (1200, 600);

const BACKGROUND: RGBColor = RGBColor(14, 12, 28);
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(179, 107, 255), RGBColor(0, 229, 255)];
const SERIES_COLOR_NAMES: [&str; 2] = ["violet", "cyan"];
const SWATCH: (i32, i32) = (36, 8);

/// Which color each series is drawn in, in series order, e.g.
/// `AAPL violet, MSFT cyan`. The PNG carries no text, so this is reported
/// alongside the file.
pub fn legend(handle: &ChartHandle) -> String {
    handle
        .spec()
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", s.name, SERIES_COLOR_NAMES[i % SERIES_COLOR_NAMES.len()]))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn export_file_name(unix_millis: i64) -> String {
    format!("chart-{}.png", unix_millis)
}

/// Rasterize the chart into `path`.
pub fn write_png(handle: &ChartHandle, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, EXPORT_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| anyhow!("PNG export failed: {}", e))?;

    // Legend swatches along the top margin, one per series, left to right.
    for i in 0..handle.points().len() {
        let x = 24 + i as i32 * (SWATCH.0 + 12);
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        root.draw(&Rectangle::new([(x, 8), (x + SWATCH.0, 8 + SWATCH.1)], color.filled()))
            .map_err(|e| anyhow!("PNG export failed: {}", e))?;
    }

    let [x0, x1] = handle.x_bounds();
    let [y0, y1] = handle.y_bounds();
    let mut chart = ChartBuilder::on(&root)
        .margin(24)
        .build_cartesian_2d(x0..x1, y0..y1)
        .map_err(|e| anyhow!("PNG export failed: {}", e))?;

    for (i, points) in handle.points().iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))
            .map_err(|e| anyhow!("PNG export failed: {}", e))?;
    }

    root.present()
        .map_err(|e| anyhow!("PNG export failed: {}", e))?;
    Ok(())
}

/// Write `chart-{millis}.png` into `dir`, creating it if needed.
pub fn export_chart(handle: &ChartHandle, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(export_file_name(chrono::Utc::now().timestamp_millis()));
    write_png(handle, &path)?;
    tracing::info!(chart = handle.id(), path = %path.display(), legend = %legend(handle), "exported chart");
    Ok(path)
}
