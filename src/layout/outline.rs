//! Text outline and counters for annotated trees

use std::fmt::Write;

use crate::schema::{traverse_tree, NodeSchema};

use super::types::{LayoutAnnotation, LayoutItem, LayoutType};

/// One line per annotated container, indented by depth
///
/// ```text
/// card: column gap=10 left/top [header, row(image, column(title, subtitle))]
///   header: row gap=0 center/middle [label]
/// ```
pub fn outline(root: &NodeSchema) -> String {
    let mut out = String::new();
    traverse_tree(root, &mut |node, depth| {
        if let Some(layout) = &node.layout {
            let _ = writeln!(
                out,
                "{}{}: {}",
                "  ".repeat(depth),
                node.id,
                summarize(layout)
            );
        }
    });
    out
}

/// Single-line summary of a container annotation
pub fn summarize(layout: &LayoutAnnotation) -> String {
    let mut line = format!(
        "{} gap={} {}/{} [{}]",
        layout.layout_type,
        layout.gap,
        layout.alignment.align_horizontal.as_str(),
        layout.alignment.align_vertical.as_str(),
        items_to_string(&layout.items)
    );
    if let Some(grid) = &layout.grid {
        let _ = write!(line, " grid={}x{}", grid.columns, grid.rows);
    }
    if !layout.absolute.is_empty() {
        let ids: Vec<&str> = layout.absolute.iter().map(|a| a.id.as_str()).collect();
        let _ = write!(line, " absolute=[{}]", ids.join(", "));
    }
    line
}

fn items_to_string(items: &[LayoutItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            LayoutItem::Node { id } => id.clone(),
            LayoutItem::Group(group) => {
                format!("{}({})", group.layout_type, items_to_string(&group.items))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Counts over an annotated tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutStats {
    pub containers: usize,
    pub rows: usize,
    pub columns: usize,
    pub mixes: usize,
    /// Nested virtual groups
    pub groups: usize,
    pub absolute: usize,
    pub grids: usize,
}

impl LayoutStats {
    pub fn collect(root: &NodeSchema) -> Self {
        let mut stats = Self::default();
        traverse_tree(root, &mut |node, _| {
            let Some(layout) = &node.layout else {
                return;
            };
            stats.containers += 1;
            stats.count_type(layout.layout_type);
            stats.absolute += layout.absolute.len();
            if layout.grid.is_some() {
                stats.grids += 1;
            }
            stats.count_groups(&layout.items);
        });
        stats
    }

    fn count_type(&mut self, layout_type: LayoutType) {
        match layout_type {
            LayoutType::Row => self.rows += 1,
            LayoutType::Column => self.columns += 1,
            LayoutType::Mix => self.mixes += 1,
        }
    }

    fn count_groups(&mut self, items: &[LayoutItem]) {
        for item in items {
            if let LayoutItem::Group(group) = item {
                self.groups += 1;
                self.count_groups(&group.items);
            }
        }
    }
}
