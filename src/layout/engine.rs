//! Layout inference over a design tree
//!
//! Walks the tree children first and, for every node with children, runs the detectors in
//! order:
//!
//! 1. [`classify`] the children into flow, absolute, hidden, and slot buckets
//! 2. [`determine_layout_type`] for the flow children (normal and slot)
//! 3. [`detect_alignment`], [`calculate_optimal_gap`], [`content_padding`]
//! 4. [`detect_grid_pattern`] as a side signal
//! 5. resolve each multi-member group as a nested virtual container
//!
//! The input tree is never modified; a new annotated tree is returned.

use crate::schema::{map_tree, NodeSchema};

use super::align::{calculate_optimal_gap, content_padding, detect_alignment};
use super::classify::classify;
use super::config::LayoutConfig;
use super::determine::determine_layout_type;
use super::geometry::{bounding_box, relative_frame};
use super::grid::detect_grid_pattern;
use super::types::*;

/// Annotate every container in the tree with its inferred layout
///
/// Leaf nodes carry no annotation. Running this on its own output yields the same tree.
pub fn infer_layout(root: &NodeSchema, config: &LayoutConfig) -> NodeSchema {
    map_tree(root, &mut |node| annotate(node, config))
}

fn annotate(mut node: NodeSchema, config: &LayoutConfig) -> NodeSchema {
    node.layout = if node.children.is_empty() {
        None
    } else {
        Some(container_layout(&node, config))
    };
    node
}

/// Infer the layout of one container from its immediate children
///
/// A container without a usable frame is measured against its children's bounding box.
pub fn container_layout(node: &NodeSchema, config: &LayoutConfig) -> LayoutAnnotation {
    let children = &node.children;
    let frame = node
        .frame()
        .copied()
        .or_else(|| bounding_box(children.iter().filter_map(|c| c.frame())))
        .unwrap_or_default();

    let classes = classify(children, config);
    let flow: Vec<&NodeSchema> = classes.flow().into_iter().map(|i| &children[i]).collect();

    let decision = determine_layout_type(&flow, config);
    let alignment = detect_alignment(&frame, &flow, config);
    let grid = detect_grid_pattern(&flow, config);
    let items = resolve_items(&flow, &decision, &frame, config);

    log::debug!(
        "container '{}': {} with {} item(s), {} absolute, {} hidden, {} slot(s)",
        node.id,
        decision.layout_type,
        items.len(),
        classes.absolute.len(),
        classes.hidden.len(),
        classes.slot.len()
    );
    if decision.layout_type == LayoutType::Mix && flow.len() > 1 {
        log::debug!(
            "container '{}': no clean split, falling back to absolute positioning",
            node.id
        );
    }

    LayoutAnnotation {
        layout_type: decision.layout_type,
        items,
        gap: calculate_optimal_gap(&decision.gaps),
        alignment,
        padding: content_padding(&frame, &flow),
        absolute: classes
            .absolute
            .iter()
            .map(|&i| AbsoluteItem {
                id: children[i].id.clone(),
                frame: children[i].frame().map(|f| relative_frame(f, &frame)),
            })
            .collect(),
        hidden: ids(&classes.hidden, children),
        slots: ids(&classes.slot, children),
        grid: grid.is_grid.then_some(grid),
        wrap: grid.is_grid,
    }
}

fn ids(indices: &[usize], children: &[NodeSchema]) -> Vec<String> {
    indices.iter().map(|&i| children[i].id.clone()).collect()
}

fn node_item(node: &NodeSchema) -> LayoutItem {
    LayoutItem::Node {
        id: node.id.clone(),
    }
}

/// Turn a decision's groups into flow items, nesting groups of several members
fn resolve_items(
    nodes: &[&NodeSchema],
    decision: &LayoutDecision,
    frame: &Frame,
    config: &LayoutConfig,
) -> Vec<LayoutItem> {
    if decision.layout_type == LayoutType::Mix {
        return nodes.iter().map(|n| node_item(n)).collect();
    }

    let mut items = Vec::with_capacity(decision.groups.len());
    for group in &decision.groups {
        let members: Vec<&NodeSchema> = group.iter().map(|&i| nodes[i]).collect();
        let framed = members.iter().filter(|m| m.frame().is_some()).count();
        // a group must shrink, or the nested layout would repeat this one
        if framed > 1 && members.len() < nodes.len() {
            items.push(LayoutItem::Group(resolve_group(
                &members,
                decision.layout_type,
                frame,
                config,
            )));
        } else {
            items.extend(members.iter().map(|n| node_item(n)));
        }
    }
    items
}

/// Lay out a group as a virtual container spanning the parent's cross axis
fn resolve_group(
    members: &[&NodeSchema],
    parent_type: LayoutType,
    parent: &Frame,
    config: &LayoutConfig,
) -> LayoutGroup {
    let bbox = bounding_box(members.iter().filter_map(|m| m.frame())).unwrap_or(*parent);
    let frame = match parent_type {
        LayoutType::Row => Frame::new(bbox.left, parent.top, bbox.width, parent.height),
        LayoutType::Column | LayoutType::Mix => {
            Frame::new(parent.left, bbox.top, parent.width, bbox.height)
        }
    };

    let decision = determine_layout_type(members, config);
    LayoutGroup {
        frame,
        layout_type: decision.layout_type,
        items: resolve_items(members, &decision, &frame, config),
        gap: calculate_optimal_gap(&decision.gaps),
        alignment: detect_alignment(&frame, members, config),
    }
}
