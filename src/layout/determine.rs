//! Resolve the layout type of a set of in-flow children

use crate::schema::{has_loop, is_slot_node, NodeSchema};

use super::align::needs_absolute_positioning;
use super::config::LayoutConfig;
use super::geometry::gap_along;
use super::split::{analyze_split, split_to_column, split_to_row};
use super::types::{Axis, LayoutDecision, LayoutType};

/// Decide how `children` are laid out; the first applicable rule wins
///
/// 1. no children: an empty row
/// 2. a loop child: column when that child is wider than tall, row otherwise, one group per child
/// 3. a single child: a row with one group
/// 4. only slots, or no frames at all: a row with one group per child
/// 5. deep overlap among children: mix
/// 6. otherwise the preferred of the row and column splits, or mix when neither works
pub fn determine_layout_type(children: &[&NodeSchema], config: &LayoutConfig) -> LayoutDecision {
    let count = children.len();
    if count == 0 {
        return LayoutDecision {
            layout_type: LayoutType::Row,
            groups: vec![],
            gaps: vec![],
        };
    }

    if let Some(looped) = children.iter().find(|child| has_loop(child)) {
        let wide = looped.frame().is_some_and(|f| f.width > f.height);
        let layout_type = if wide {
            LayoutType::Column
        } else {
            LayoutType::Row
        };
        log::debug!(
            "loop child '{}' sets {} layout for {} item(s)",
            looped.id,
            layout_type,
            count
        );
        return sequential(children, layout_type);
    }

    if count == 1 {
        return LayoutDecision {
            layout_type: LayoutType::Row,
            groups: vec![vec![0]],
            gaps: vec![],
        };
    }

    let all_slots = children.iter().all(|child| is_slot_node(child));
    let any_frame = children.iter().any(|child| child.frame().is_some());
    if all_slots || !any_frame {
        return sequential(children, LayoutType::Row);
    }

    if needs_absolute_positioning(children, config) {
        return mix(count);
    }

    let decision = analyze_split(
        split_to_row(children, config),
        split_to_column(children, config),
    );
    match decision.direction {
        LayoutType::Mix => mix(count),
        layout_type => LayoutDecision {
            layout_type,
            groups: decision.result.groups,
            gaps: decision.result.gaps,
        },
    }
}

/// Every child in its own group, in the given order
fn sequential(children: &[&NodeSchema], layout_type: LayoutType) -> LayoutDecision {
    let axis = layout_type.main_axis().unwrap_or(Axis::Horizontal);
    let gaps = children
        .windows(2)
        .map(|pair| match (pair[0].frame(), pair[1].frame()) {
            (Some(a), Some(b)) => gap_along(axis, a, b),
            _ => 0.0,
        })
        .collect();
    LayoutDecision {
        layout_type,
        groups: (0..children.len()).map(|i| vec![i]).collect(),
        gaps,
    }
}

fn mix(count: usize) -> LayoutDecision {
    LayoutDecision {
        layout_type: LayoutType::Mix,
        groups: vec![(0..count).collect()],
        gaps: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Frame;
    use crate::schema::LoopMarker;

    fn node(id: &str, left: f64, top: f64, width: f64, height: f64) -> NodeSchema {
        NodeSchema::new(id, "View").with_frame(Frame::new(left, top, width, height))
    }

    fn decide(nodes: &[NodeSchema]) -> LayoutDecision {
        let refs: Vec<&NodeSchema> = nodes.iter().collect();
        determine_layout_type(&refs, &LayoutConfig::default())
    }

    #[test]
    fn test_empty_is_row() {
        let decision = decide(&[]);
        assert_eq!(decision.layout_type, LayoutType::Row);
        assert!(decision.groups.is_empty());
    }

    #[test]
    fn test_single_child_is_row() {
        let decision = decide(&[node("a", 0.0, 0.0, 10.0, 100.0)]);
        assert_eq!(decision.layout_type, LayoutType::Row);
        assert_eq!(decision.groups, vec![vec![0]]);
    }

    #[test]
    fn test_wide_loop_is_column() {
        let nodes = vec![node("item", 0.0, 0.0, 300.0, 50.0).with_loop(LoopMarker::Enabled(true))];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Column);
        assert_eq!(decision.groups, vec![vec![0]]);
    }

    #[test]
    fn test_tall_loop_is_row() {
        let nodes = vec![
            node("card", 0.0, 0.0, 100.0, 150.0).with_loop(LoopMarker::Enabled(true)),
            node("card2", 110.0, 0.0, 100.0, 150.0),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Row);
        assert_eq!(decision.gaps, vec![10.0]);
    }

    #[test]
    fn test_all_slots_is_row() {
        let nodes = vec![
            NodeSchema::new("s1", "Slot"),
            NodeSchema::new("s2", "Slot"),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Row);
        assert_eq!(decision.groups, vec![vec![0], vec![1]]);
        assert_eq!(decision.gaps, vec![0.0]);
    }

    #[test]
    fn test_vertical_stack_is_column() {
        let nodes = vec![
            node("title", 0.0, 0.0, 200.0, 30.0),
            node("body", 0.0, 40.0, 200.0, 100.0),
            node("footer", 0.0, 150.0, 200.0, 30.0),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Column);
        assert_eq!(decision.groups, vec![vec![0], vec![1], vec![2]]);
        assert_eq!(decision.gaps, vec![10.0, 10.0]);
    }

    #[test]
    fn test_row_major_grid_keeps_reading_order() {
        let nodes = vec![
            node("a", 0.0, 0.0, 80.0, 40.0),
            node("b", 100.0, 0.0, 80.0, 40.0),
            node("c", 0.0, 50.0, 80.0, 40.0),
            node("d", 100.0, 50.0, 80.0, 40.0),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Column);
        assert_eq!(decision.groups, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_overlap_is_mix() {
        let nodes = vec![
            node("a", 0.0, 0.0, 100.0, 100.0),
            node("b", 50.0, 50.0, 100.0, 100.0),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Mix);
        assert_eq!(decision.groups, vec![vec![0, 1]]);
    }

    #[test]
    fn test_pinwheel_is_mix() {
        // four bars around a square hole: no band structure either way
        let nodes = vec![
            node("top", 0.0, 0.0, 70.0, 30.0),
            node("right", 70.0, 0.0, 30.0, 70.0),
            node("bottom", 30.0, 70.0, 70.0, 30.0),
            node("left", 0.0, 30.0, 30.0, 70.0),
        ];
        let decision = decide(&nodes);
        assert_eq!(decision.layout_type, LayoutType::Mix);
    }
}
