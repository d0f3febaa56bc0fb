//! Design-tree schema: nodes, marker predicates, and tree walks

pub mod node;
pub mod tree;

pub use node::{
    has_loop, is_fixed_node, is_hidden_node, is_slot_node, LayoutHints, LoopConfig, LoopMarker,
    NodeSchema, SLOT_COMPONENT,
};
pub use tree::{find_node, map_tree, traverse_tree};

use crate::error::SchemaError;

/// Decode a design tree from JSON
pub fn parse(source: &str) -> Result<NodeSchema, SchemaError> {
    serde_json::from_str(source).map_err(|e| SchemaError::from_json(&e))
}
