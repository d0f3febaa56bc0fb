//! Uniform grid detection
//!
//! Independent of the row/column split: the result is reported alongside the flex layout
//! for generators that can emit wrapping or grid output.

use crate::schema::NodeSchema;

use super::config::LayoutConfig;
use super::types::GridPattern;

/// Count clusters of values, merging a value into the first cluster whose representative is
/// within `tolerance`
fn cluster_count(values: impl IntoIterator<Item = f64>, tolerance: f64) -> usize {
    let mut representatives: Vec<f64> = Vec::new();
    for value in values {
        if !representatives
            .iter()
            .any(|r| (r - value).abs() <= tolerance)
        {
            representatives.push(value);
        }
    }
    representatives.len()
}

/// Detect a rows-by-columns arrangement among framed children
///
/// Columns are clusters of left edges, rows clusters of top edges. The children form a grid
/// when there are at least two of each and the cell count matches the child count to within
/// one (a short or overflowing last row).
pub fn detect_grid_pattern(children: &[&NodeSchema], config: &LayoutConfig) -> GridPattern {
    let frames: Vec<_> = children.iter().filter_map(|c| c.frame()).collect();
    if frames.len() < config.grid_min_children {
        return GridPattern::default();
    }

    let tolerance = config.grid_cluster_tolerance;
    let columns = cluster_count(frames.iter().map(|f| f.left), tolerance);
    let rows = cluster_count(frames.iter().map(|f| f.top), tolerance);
    let cells = rows * columns;
    let is_grid = columns >= 2 && rows >= 2 && children.len().abs_diff(cells) <= 1;

    if is_grid {
        log::debug!("grid pattern: {} columns x {} rows", columns, rows);
    }

    GridPattern {
        is_grid,
        columns,
        rows,
    }
}
