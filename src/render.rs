use anyhow::{bail, Result};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use schelling_common::RoundSnapshot;
use std::ops::Range;
use std::path::Path;

use crate::layout::GridLayout;

// Marker styling shared by both groups.
const MARKER_RADIUS: i32 = 3;
const MARKER_ALPHA: f64 = 0.6;

// Group colors and the per-cell background shade.
const GROUP_A_COLOR: RGBColor = RGBColor(255, 165, 0); // orange
const GROUP_B_COLOR: RGBColor = RGBColor(0, 128, 0); // green
const CELL_BACKGROUND: RGBColor = RGBColor(240, 255, 255); // azure

// Two 300 px columns; each row adds 200 px of height.
const CELL_WIDTH: u32 = 300;
const CELL_HEIGHT: u32 = 200;

/// Renders one scatter cell per round and writes the figure to `output`.
///
/// The backend is chosen from the output extension: `.svg` produces a
/// vector figure, anything else goes through the bitmap backend and
/// inherits its set of supported raster formats. Nothing is written to
/// `output` unless every round passes validation and drawing succeeds.
pub fn render_rounds(rounds: &[RoundSnapshot], label: &str, output: &Path) -> Result<()> {
    if rounds.is_empty() {
        bail!("locations file contains no rounds, nothing to plot");
    }
    for (round, snapshot) in rounds.iter().enumerate() {
        if snapshot.group_a.is_empty() {
            bail!("round {} has no group-A agent positions", round);
        }
        if snapshot.group_b.is_empty() {
            bail!("round {} has no group-B agent positions", round);
        }
    }

    let layout = GridLayout::for_rounds(rounds.len());
    let width = layout.cols as u32 * CELL_WIDTH;
    let height = layout.rows as u32 * CELL_HEIGHT;
    info!(
        "Rendering {} rounds of '{}' on a {}x{} grid ({}x{} px, {} blank cell(s))",
        rounds.len(),
        label,
        layout.rows,
        layout.cols,
        width,
        height,
        layout.unused_cells()
    );

    let is_svg = output
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(output, (width, height)).into_drawing_area();
        draw_grid(&root, layout, rounds)?;
        root.present()
            .map_err(|e| anyhow::anyhow!("Failed to write figure to '{}': {}", output.display(), e))?;
    } else {
        let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
        draw_grid(&root, layout, rounds)?;
        root.present()
            .map_err(|e| anyhow::anyhow!("Failed to write figure to '{}': {}", output.display(), e))?;
    }

    Ok(())
}

/// Splits the root area into the grid and draws every round's cell.
///
/// `split_evenly` yields cells in row-major order, matching
/// `GridLayout::position`, so the cell index is the round index. Trailing
/// cells past the last round stay blank.
fn draw_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: GridLayout,
    rounds: &[RoundSnapshot],
) -> Result<()> {
    root.fill(&WHITE).map_err(draw_err)?;

    let cells = root.split_evenly((layout.rows, layout.cols));
    for (round, snapshot) in rounds.iter().enumerate() {
        let (row, col) = layout.position(round);
        draw_cell(&cells[row * layout.cols + col], round, snapshot)?;
    }

    Ok(())
}

/// Draws one round: captioned cell, azure plot background, no tick labels,
/// then the two marker series.
fn draw_cell<DB: DrawingBackend>(
    cell: &DrawingArea<DB, Shift>,
    round: usize,
    snapshot: &RoundSnapshot,
) -> Result<()> {
    let (x_range, y_range) = data_bounds(snapshot);

    let mut chart = ChartBuilder::on(cell)
        .caption(format!("Cycle {}", round), ("sans-serif", 16))
        .margin(5)
        .build_cartesian_2d(x_range, y_range)
        .map_err(draw_err)?;

    chart
        .plotting_area()
        .fill(&CELL_BACKGROUND)
        .map_err(draw_err)?;

    chart
        .draw_series(snapshot.group_a.iter().map(|&(x, y)| {
            Circle::new((x, y), MARKER_RADIUS, GROUP_A_COLOR.mix(MARKER_ALPHA).filled())
        }))
        .map_err(draw_err)?;
    chart
        .draw_series(snapshot.group_b.iter().map(|&(x, y)| {
            Circle::new((x, y), MARKER_RADIUS, GROUP_B_COLOR.mix(MARKER_ALPHA).filled())
        }))
        .map_err(draw_err)?;

    Ok(())
}

/// Axis ranges covering both groups of one round, padded by 5% per side.
fn data_bounds(snapshot: &RoundSnapshot) -> (Range<f32>, Range<f32>) {
    let mut x_min = f32::INFINITY;
    let mut x_max = f32::NEG_INFINITY;
    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;

    for &(x, y) in snapshot.group_a.iter().chain(snapshot.group_b.iter()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

fn pad_range(min: f32, max: f32) -> Range<f32> {
    let span = max - min;
    if span <= f32::EPSILON {
        // Degenerate extent (single point or an axis-aligned cluster).
        (min - 0.5)..(max + 0.5)
    } else {
        let pad = span * 0.05;
        (min - pad)..(max + pad)
    }
}

fn draw_err<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow::anyhow!("Failed to draw figure: {}", err)
}
