//! Generic walks over the node tree

use super::node::NodeSchema;

/// Visit every node depth-first, parents before children, with its depth
pub fn traverse_tree<F>(node: &NodeSchema, visit: &mut F)
where
    F: FnMut(&NodeSchema, usize),
{
    traverse_at(node, 0, visit);
}

fn traverse_at<F>(node: &NodeSchema, depth: usize, visit: &mut F)
where
    F: FnMut(&NodeSchema, usize),
{
    visit(node, depth);
    for child in &node.children {
        traverse_at(child, depth + 1, visit);
    }
}

/// Build a new tree by applying `f` to every node, children first
///
/// `f` receives an owned copy of the node whose children have already been mapped.
/// The input tree is left untouched.
pub fn map_tree<F>(node: &NodeSchema, f: &mut F) -> NodeSchema
where
    F: FnMut(NodeSchema) -> NodeSchema,
{
    let children = node.children.iter().map(|child| map_tree(child, f)).collect();
    let mut copy = node.shallow_clone();
    copy.children = children;
    f(copy)
}

/// First node (depth-first) with the given id
pub fn find_node<'a>(node: &'a NodeSchema, id: &str) -> Option<&'a NodeSchema> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_node(child, id))
}
