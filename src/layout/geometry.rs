//! Pure geometry over axis-aligned frames
//!
//! Every function here is total: degenerate input (zero-area frames, empty lists) yields
//! zero overlap or `None`, never a panic.
//!
//! Tolerances are in pixels. A positive tolerance grows the compared ranges, a negative one
//! shrinks them, so `overlaps(a, b, -10.0)` only holds when the frames overlap by more than
//! 10px on both axes.

use std::cmp::Ordering;

use crate::schema::NodeSchema;

use super::types::{Axis, Frame, RawFrame};

/// Fill in derived edges; missing position or size fields default to 0
///
/// A missing width or height is recovered from `right`/`bottom` when those are present.
pub fn normalize(raw: &RawFrame) -> Frame {
    let left = raw.left.unwrap_or(0.0);
    let top = raw.top.unwrap_or(0.0);
    let width = raw
        .width
        .or_else(|| raw.right.map(|right| right - left))
        .unwrap_or(0.0);
    let height = raw
        .height
        .or_else(|| raw.bottom.map(|bottom| bottom - top))
        .unwrap_or(0.0);
    Frame::new(left, top, width, height)
}

/// Depth of the overlap between two ranges; negative when they are apart
fn range_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> f64 {
    a_end.min(b_end) - a_start.max(b_start)
}

/// Overlap test along a single axis
pub fn overlaps_along(axis: Axis, a: &Frame, b: &Frame, tolerance: f64) -> bool {
    range_overlap(a.start(axis), a.end(axis), b.start(axis), b.end(axis)) + tolerance > 0.0
}

pub fn overlaps_horizontally(a: &Frame, b: &Frame, tolerance: f64) -> bool {
    overlaps_along(Axis::Horizontal, a, b, tolerance)
}

pub fn overlaps_vertically(a: &Frame, b: &Frame, tolerance: f64) -> bool {
    overlaps_along(Axis::Vertical, a, b, tolerance)
}

/// Frames overlap when their ranges overlap on both axes
pub fn overlaps(a: &Frame, b: &Frame, tolerance: f64) -> bool {
    overlaps_horizontally(a, b, tolerance) && overlaps_vertically(a, b, tolerance)
}

/// Signed distance between two frames along an axis
///
/// Positive values are whitespace, negative values are the overlap depth.
pub fn gap_along(axis: Axis, a: &Frame, b: &Frame) -> f64 {
    -range_overlap(a.start(axis), a.end(axis), b.start(axis), b.end(axis))
}

pub fn gap_horizontal(a: &Frame, b: &Frame) -> f64 {
    gap_along(Axis::Horizontal, a, b)
}

pub fn gap_vertical(a: &Frame, b: &Frame) -> f64 {
    gap_along(Axis::Vertical, a, b)
}

/// Axis-aligned union of all frames, or `None` for an empty list
pub fn bounding_box<'a, I>(frames: I) -> Option<Frame>
where
    I: IntoIterator<Item = &'a Frame>,
{
    frames
        .into_iter()
        .fold(None, |acc: Option<Frame>, f| match acc {
            Some(bbox) => Some(bbox.union(f)),
            None => Some(*f),
        })
}

/// Express `child` in the coordinate space of `parent`
pub fn relative_frame(child: &Frame, parent: &Frame) -> Frame {
    Frame::new(
        child.left - parent.left,
        child.top - parent.top,
        child.width,
        child.height,
    )
}

/// Whether `child` lies inside `parent`, allowing `tolerance` pixels of spill on each edge
pub fn contains(parent: &Frame, child: &Frame, tolerance: f64) -> bool {
    child.left >= parent.left - tolerance
        && child.top >= parent.top - tolerance
        && child.right <= parent.right + tolerance
        && child.bottom <= parent.bottom + tolerance
}

/// Same top and height, or same left and width, within `tolerance`
pub fn aligned(a: &Frame, b: &Frame, tolerance: f64) -> bool {
    let close = |x: f64, y: f64| (x - y).abs() <= tolerance;
    (close(a.top, b.top) && close(a.height, b.height))
        || (close(a.left, b.left) && close(a.width, b.width))
}

/// Order two optional frames by their leading edge on `axis`, then on the other axis
///
/// Frameless entries sort after framed ones.
pub fn compare_position(a: Option<&Frame>, b: Option<&Frame>, axis: Axis) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let cross = axis.perpendicular();
            a.start(axis)
                .total_cmp(&b.start(axis))
                .then_with(|| a.start(cross).total_cmp(&b.start(cross)))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of nodes by position along `axis`
pub fn sort_by_position(nodes: &mut [&NodeSchema], axis: Axis) {
    nodes.sort_by(|a, b| compare_position(a.frame(), b.frame(), axis));
}

/// Whether frames can be laid out one after another along `axis`
///
/// After sorting along `axis`, no consecutive pair may overlap by more than `tolerance` on
/// both axes at once.
pub fn can_arrange(frames: &[&Frame], axis: Axis, tolerance: f64) -> bool {
    let mut sorted: Vec<&Frame> = frames.to_vec();
    sorted.sort_by(|a, b| compare_position(Some(*a), Some(*b), axis));
    sorted.windows(2).all(|pair| {
        let (prev, next) = (pair[0], pair[1]);
        !(overlaps_along(axis, prev, next, -tolerance)
            && overlaps_along(axis.perpendicular(), prev, next, -tolerance))
    })
}

/// Whether framed nodes can sit in a single left-to-right row
pub fn can_arrange_in_row(nodes: &[&NodeSchema], tolerance: f64) -> bool {
    let frames: Vec<&Frame> = nodes.iter().filter_map(|n| n.frame()).collect();
    can_arrange(&frames, Axis::Horizontal, tolerance)
}

/// Whether framed nodes can sit in a single top-to-bottom column
pub fn can_arrange_in_column(nodes: &[&NodeSchema], tolerance: f64) -> bool {
    let frames: Vec<&Frame> = nodes.iter().filter_map(|n| n.frame()).collect();
    can_arrange(&frames, Axis::Vertical, tolerance)
}
