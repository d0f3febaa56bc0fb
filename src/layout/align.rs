//! Alignment, gap, and padding detection for a container's content

use crate::schema::NodeSchema;

use super::config::LayoutConfig;
use super::geometry::{bounding_box, overlaps};
use super::split::split_to_row;
use super::types::{Alignment, Frame, HorizontalAlign, Padding, VerticalAlign};

/// Margins between a container's edges and the bounding box of its content
struct Margins {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

fn content_margins(parent: &Frame, frames: &[&Frame]) -> Option<Margins> {
    let bbox = bounding_box(frames.iter().copied())?;
    Some(Margins {
        left: bbox.left - parent.left,
        right: parent.right - bbox.right,
        top: bbox.top - parent.top,
        bottom: parent.bottom - bbox.bottom,
    })
}

/// Detect how the children sit inside `parent`
///
/// Horizontal: `space-between` when more than two children are spread edge to edge with
/// near-equal gaps, otherwise `center`, `right`, or `left` from the margin difference.
/// Vertical: `stretch` when every child spans the parent's height, then `middle`, `bottom`,
/// or `top`.
pub fn detect_alignment(
    parent: &Frame,
    children: &[&NodeSchema],
    config: &LayoutConfig,
) -> Alignment {
    let frames: Vec<&Frame> = children.iter().filter_map(|c| c.frame()).collect();
    let Some(margins) = content_margins(parent, &frames) else {
        return Alignment::default();
    };

    let h_tol = config.align_tolerance(parent.width);
    let flush = margins.left.abs() <= h_tol && margins.right.abs() <= h_tol;
    let align_horizontal = if flush && frames.len() > 2 && spread_evenly(children, config) {
        HorizontalAlign::SpaceBetween
    } else {
        symmetric_horizontal(&margins, h_tol)
    };

    let v_tol = config.align_tolerance(parent.height);
    let align_vertical = if frames
        .iter()
        .all(|f| (f.height - parent.height).abs() <= v_tol)
    {
        VerticalAlign::Stretch
    } else if (margins.top - margins.bottom).abs() <= v_tol {
        VerticalAlign::Middle
    } else if margins.top > margins.bottom {
        VerticalAlign::Bottom
    } else {
        VerticalAlign::Top
    };

    Alignment {
        align_horizontal,
        align_vertical,
    }
}

fn symmetric_horizontal(margins: &Margins, tolerance: f64) -> HorizontalAlign {
    if (margins.left - margins.right).abs() <= tolerance {
        HorizontalAlign::Center
    } else if margins.left > margins.right {
        HorizontalAlign::Right
    } else {
        HorizontalAlign::Left
    }
}

/// Children split cleanly into a row whose gaps differ by at most the space-between tolerance
fn spread_evenly(children: &[&NodeSchema], config: &LayoutConfig) -> bool {
    let split = split_to_row(children, config);
    let gaps = &split.gaps;
    let min = gaps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    split.success && !gaps.is_empty() && max - min <= config.space_between_gap_tolerance
}

/// The flex gap for a set of measured gaps: the rounded smallest positive one
///
/// Overlaps (non-positive gaps) are ignored; 0 when nothing is left. Using the minimum keeps
/// the generated gap from exceeding the tightest spacing in the design.
pub fn calculate_optimal_gap(gaps: &[f64]) -> f64 {
    gaps.iter()
        .copied()
        .filter(|g| *g > 0.0)
        .fold(None, |min: Option<f64>, g| Some(min.map_or(g, |m| m.min(g))))
        .map_or(0.0, f64::round)
}

/// Whether any two children overlap deeper than `overlap_tolerance`
pub fn needs_absolute_positioning(children: &[&NodeSchema], config: &LayoutConfig) -> bool {
    let frames: Vec<&Frame> = children.iter().filter_map(|c| c.frame()).collect();
    frames.iter().enumerate().any(|(i, a)| {
        frames[i + 1..]
            .iter()
            .any(|b| overlaps(a, b, config.overlap_tolerance))
    })
}

/// Insets from `parent` to the bounding box of the children, clamped at zero
pub fn content_padding(parent: &Frame, children: &[&NodeSchema]) -> Padding {
    let frames: Vec<&Frame> = children.iter().filter_map(|c| c.frame()).collect();
    match content_margins(parent, &frames) {
        Some(m) => Padding {
            top: m.top.max(0.0),
            right: m.right.max(0.0),
            bottom: m.bottom.max(0.0),
            left: m.left.max(0.0),
        },
        None => Padding::default(),
    }
}
