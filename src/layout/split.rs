//! Split children into sequential bands along one axis
//!
//! A row split walks children left to right and groups those whose horizontal ranges overlap
//! into one band (a column of stacked items). A column split is the transpose. The analyzer
//! computes both and [`analyze_split`] picks one.

use crate::schema::NodeSchema;

use super::config::LayoutConfig;
use super::geometry::{can_arrange, compare_position, overlaps_along};
use super::types::{Axis, Frame, LayoutType, SplitDecision, SplitResult};

/// Split into bands placed left to right
pub fn split_to_row(children: &[&NodeSchema], config: &LayoutConfig) -> SplitResult {
    split_along(children, Axis::Horizontal, config)
}

/// Split into bands placed top to bottom
pub fn split_to_column(children: &[&NodeSchema], config: &LayoutConfig) -> SplitResult {
    split_along(children, Axis::Vertical, config)
}

struct Band {
    members: Vec<usize>,
    frame: Frame,
}

/// Group children into bands along `axis`
///
/// The split succeeds when it yields at least two bands, each band can be stacked along the
/// other axis without overlap beyond `split_tolerance`, and the bands are consecutive runs of
/// the input order, so flattening the groups gives back `0..n`. Bands are ordered along
/// `axis`; members of a band keep their original relative order. Children without a frame
/// join the band of their nearest preceding framed sibling, or the first band.
fn split_along(children: &[&NodeSchema], axis: Axis, config: &LayoutConfig) -> SplitResult {
    let count = children.len();
    if count < 2 {
        return SplitResult::unsplit(count);
    }
    let tolerance = config.split_tolerance;

    let mut order: Vec<(usize, &Frame)> = children
        .iter()
        .enumerate()
        .filter_map(|(i, child)| child.frame().map(|f| (i, f)))
        .collect();
    if order.is_empty() {
        return SplitResult::unsplit(count);
    }
    order.sort_by(|a, b| compare_position(Some(a.1), Some(b.1), axis));

    let mut bands: Vec<Band> = Vec::new();
    for (i, frame) in order {
        match bands.last_mut() {
            Some(band) if overlaps_along(axis, &band.frame, frame, -tolerance) => {
                band.members.push(i);
                band.frame = band.frame.union(frame);
            }
            _ => bands.push(Band {
                members: vec![i],
                frame: *frame,
            }),
        }
    }

    let gaps: Vec<f64> = bands
        .windows(2)
        .map(|pair| pair[1].frame.start(axis) - pair[0].frame.end(axis))
        .collect();

    let cross = axis.perpendicular();
    let stackable = bands.iter().all(|band| {
        let frames: Vec<&Frame> = band
            .members
            .iter()
            .filter_map(|&i| children[i].frame())
            .collect();
        can_arrange(&frames, cross, tolerance)
    });

    let mut band_of: Vec<Option<usize>> = vec![None; count];
    for (b, band) in bands.iter().enumerate() {
        for &i in &band.members {
            band_of[i] = Some(b);
        }
    }
    let mut groups: Vec<Vec<usize>> = bands.into_iter().map(|band| band.members).collect();
    for i in 0..count {
        if band_of[i].is_some() {
            continue;
        }
        let target = band_of[..i].iter().rev().find_map(|b| *b).unwrap_or(0);
        band_of[i] = Some(target);
        groups[target].push(i);
    }
    for group in &mut groups {
        group.sort_unstable();
    }
    let in_order = groups.iter().flatten().copied().eq(0..count);
    let success = groups.len() >= 2 && stackable && in_order;

    log::trace!(
        "{:?} split of {} children: {} band(s), stackable={}, in_order={}, gaps={:?}",
        axis,
        count,
        groups.len(),
        stackable,
        in_order,
        gaps
    );

    SplitResult {
        success,
        groups,
        gaps,
    }
}

/// Choose between a row split and a column split
///
/// A successful split beats a failed one. When both succeed, fewer groups wins, then more
/// uniform gaps (lower variance), then the row. When neither succeeds the direction is `Mix`.
pub fn analyze_split(row: SplitResult, column: SplitResult) -> SplitDecision {
    let direction = match (row.success, column.success) {
        (true, false) => LayoutType::Row,
        (false, true) => LayoutType::Column,
        (false, false) => LayoutType::Mix,
        (true, true) => {
            if row.groups.len() != column.groups.len() {
                if row.groups.len() < column.groups.len() {
                    LayoutType::Row
                } else {
                    LayoutType::Column
                }
            } else if column.gap_variance() < row.gap_variance() {
                LayoutType::Column
            } else {
                LayoutType::Row
            }
        }
    };

    let result = match direction {
        LayoutType::Row => row,
        LayoutType::Column => column,
        LayoutType::Mix => {
            let count = row.groups.iter().map(Vec::len).sum();
            SplitResult::unsplit(count)
        }
    };
    SplitDecision { direction, result }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, left: f64, top: f64, width: f64, height: f64) -> NodeSchema {
        NodeSchema::new(id, "View").with_frame(Frame::new(left, top, width, height))
    }

    fn refs(nodes: &[NodeSchema]) -> Vec<&NodeSchema> {
        nodes.iter().collect()
    }

    #[test]
    fn test_horizontal_list_splits_to_row() {
        let nodes = vec![
            node("a", 0.0, 0.0, 80.0, 40.0),
            node("b", 100.0, 0.0, 80.0, 40.0),
            node("c", 200.0, 0.0, 80.0, 40.0),
        ];
        let config = LayoutConfig::default();
        let row = split_to_row(&refs(&nodes), &config);
        assert!(row.success);
        assert_eq!(row.groups, vec![vec![0], vec![1], vec![2]]);
        assert_eq!(row.gaps, vec![20.0, 20.0]);

        let column = split_to_column(&refs(&nodes), &config);
        assert!(!column.success);
        assert_eq!(column.groups, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_row_split_builds_column_bands() {
        // two columns, each with two stacked items
        let nodes = vec![
            node("a", 0.0, 0.0, 100.0, 40.0),
            node("b", 0.0, 50.0, 100.0, 40.0),
            node("c", 120.0, 0.0, 100.0, 40.0),
            node("d", 120.0, 50.0, 100.0, 40.0),
        ];
        let row = split_to_row(&refs(&nodes), &LayoutConfig::default());
        assert!(row.success);
        assert_eq!(row.groups, vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(row.gaps, vec![20.0]);
    }

    #[test]
    fn test_out_of_order_input_does_not_split() {
        let nodes = vec![
            node("right", 200.0, 0.0, 80.0, 40.0),
            node("left", 0.0, 0.0, 80.0, 40.0),
        ];
        let row = split_to_row(&refs(&nodes), &LayoutConfig::default());
        assert!(!row.success);
        assert_eq!(row.groups, vec![vec![1], vec![0]]);
        assert_eq!(row.gaps, vec![120.0]);
    }

    #[test]
    fn test_row_major_grid_splits_into_rows_only() {
        let nodes = vec![
            node("a", 0.0, 0.0, 80.0, 40.0),
            node("b", 100.0, 0.0, 80.0, 40.0),
            node("c", 0.0, 50.0, 80.0, 40.0),
            node("d", 100.0, 50.0, 80.0, 40.0),
        ];
        let config = LayoutConfig::default();

        let row = split_to_row(&refs(&nodes), &config);
        assert_eq!(row.groups, vec![vec![0, 2], vec![1, 3]]);
        assert!(!row.success);

        let column = split_to_column(&refs(&nodes), &config);
        assert!(column.success);
        assert_eq!(column.groups, vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(column.gaps, vec![10.0]);
    }

    #[test]
    fn test_overlapping_band_members_fail() {
        let nodes = vec![
            node("a", 0.0, 0.0, 100.0, 60.0),
            node("b", 10.0, 40.0, 100.0, 60.0),
            node("c", 200.0, 0.0, 50.0, 50.0),
        ];
        let row = split_to_row(&refs(&nodes), &LayoutConfig::default());
        assert_eq!(row.groups.len(), 2);
        assert!(!row.success);
    }

    #[test]
    fn test_too_few_children() {
        let nodes = vec![node("a", 0.0, 0.0, 10.0, 10.0)];
        let row = split_to_row(&refs(&nodes), &LayoutConfig::default());
        assert!(!row.success);
        assert_eq!(row.groups, vec![vec![0]]);
        assert!(row.gaps.is_empty());
    }

    #[test]
    fn test_frameless_child_follows_preceding_sibling() {
        let nodes = vec![
            node("a", 0.0, 0.0, 80.0, 40.0),
            NodeSchema::new("label", "Text"),
            node("b", 100.0, 0.0, 80.0, 40.0),
        ];
        let row = split_to_row(&refs(&nodes), &LayoutConfig::default());
        assert!(row.success);
        assert_eq!(row.groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn test_analyze_prefers_fewer_groups() {
        let row = SplitResult {
            success: true,
            groups: vec![vec![0, 3], vec![1, 4], vec![2, 5]],
            gaps: vec![20.0, 20.0],
        };
        let column = SplitResult {
            success: true,
            groups: vec![vec![0, 1, 2], vec![3, 4, 5]],
            gaps: vec![10.0],
        };
        let decision = analyze_split(row, column.clone());
        assert_eq!(decision.direction, LayoutType::Column);
        assert_eq!(decision.result, column);
    }

    #[test]
    fn test_analyze_ties_on_gap_variance() {
        let row = SplitResult {
            success: true,
            groups: vec![vec![0], vec![1], vec![2]],
            gaps: vec![10.0, 40.0],
        };
        let column = SplitResult {
            success: true,
            groups: vec![vec![0], vec![1], vec![2]],
            gaps: vec![12.0, 12.0],
        };
        assert_eq!(analyze_split(row, column).direction, LayoutType::Column);
    }

    #[test]
    fn test_analyze_neither_is_mix() {
        let decision = analyze_split(SplitResult::unsplit(3), SplitResult::unsplit(3));
        assert_eq!(decision.direction, LayoutType::Mix);
        assert_eq!(decision.result.groups, vec![vec![0, 1, 2]]);
    }
}
