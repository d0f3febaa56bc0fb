//! Partition a container's children into flow, absolute, hidden, and slot buckets

use crate::schema::{is_fixed_node, is_hidden_node, is_slot_node, NodeSchema};

use super::config::LayoutConfig;
use super::geometry::overlaps;
use super::types::{ChildClassification, Frame};

/// Classify each child; the first matching rule wins
///
/// 1. hidden
/// 2. slot
/// 3. absolute: explicit `x-layout.fixed`, or overlapping a visible sibling deeper than
///    `overlap_tolerance`
/// 4. normal
///
/// A child without a usable frame is only ever absolute through the explicit flag.
pub fn classify(children: &[NodeSchema], config: &LayoutConfig) -> ChildClassification {
    let visible: Vec<(usize, &Frame)> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| !is_hidden_node(child))
        .filter_map(|(i, child)| child.frame().map(|f| (i, f)))
        .collect();

    let mut classes = ChildClassification::default();
    for (i, child) in children.iter().enumerate() {
        if is_hidden_node(child) {
            classes.hidden.push(i);
        } else if is_slot_node(child) {
            classes.slot.push(i);
        } else if is_fixed_node(child) || overlaps_sibling(i, child.frame(), &visible, config) {
            classes.absolute.push(i);
        } else {
            classes.normal.push(i);
        }
    }
    classes
}

fn overlaps_sibling(
    index: usize,
    frame: Option<&Frame>,
    visible: &[(usize, &Frame)],
    config: &LayoutConfig,
) -> bool {
    let Some(frame) = frame else {
        return false;
    };
    visible
        .iter()
        .filter(|(j, _)| *j != index)
        .filter(|(_, other)| overlaps(frame, other, config.overlap_probe_tolerance))
        .any(|(_, other)| overlaps(frame, other, config.overlap_tolerance))
}
