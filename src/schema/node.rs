//! Design-tree node and its typed markers

use serde::{Deserialize, Serialize};

use crate::layout::types::{Frame, LayoutAnnotation};

/// Component name used by importers for slot placeholders
pub const SLOT_COMPONENT: &str = "Slot";

/// A node of the design tree
///
/// Deserializes from the importer's JSON (`componentName`, `frame`, `children`, `hidden`,
/// `slot`, `loop`, `condition`, `x-layout`). `layout` is written by the inference pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSchema {
    pub id: String,
    #[serde(default)]
    pub component_name: String,
    #[serde(default, rename = "frame", skip_serializing_if = "Option::is_none")]
    pub raw_frame: Option<Frame>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSchema>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub slot: bool,
    #[serde(default, rename = "loop", skip_serializing_if = "Option::is_none")]
    pub loop_marker: Option<LoopMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
    #[serde(default, rename = "x-layout", skip_serializing_if = "LayoutHints::is_empty")]
    pub layout_hints: LayoutHints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutAnnotation>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Repeated-element marker as written by importers: a flag, a data binding, or a config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoopMarker {
    Enabled(bool),
    Binding(String),
    Config(LoopConfig),
}

/// Explicit loop configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Number of repeats shown in the design, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<usize>,
    /// Field used as the repeat key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Explicit layout overrides carried in `x-layout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutHints {
    /// Keep this node absolutely positioned regardless of geometry
    #[serde(default)]
    pub fixed: bool,
}

impl LayoutHints {
    pub fn is_empty(&self) -> bool {
        !self.fixed
    }
}

impl NodeSchema {
    pub fn new(id: impl Into<String>, component_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_name: component_name.into(),
            ..Default::default()
        }
    }

    /// The node's frame, or `None` when absent or unusable (non-finite, negative size)
    pub fn frame(&self) -> Option<&Frame> {
        self.raw_frame.as_ref().filter(|f| f.is_valid())
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.raw_frame = Some(frame);
        self
    }

    pub fn with_children(mut self, children: Vec<NodeSchema>) -> Self {
        self.children = children;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_slot(mut self, slot: bool) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_loop(mut self, marker: LoopMarker) -> Self {
        self.loop_marker = Some(marker);
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.layout_hints.fixed = fixed;
        self
    }

    /// Copy of this node without its children
    pub fn shallow_clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            component_name: self.component_name.clone(),
            raw_frame: self.raw_frame,
            children: Vec::new(),
            hidden: self.hidden,
            slot: self.slot,
            loop_marker: self.loop_marker.clone(),
            condition: self.condition.clone(),
            layout_hints: self.layout_hints,
            layout: self.layout.clone(),
        }
    }
}

/// Node explicitly marked hidden
pub fn is_hidden_node(node: &NodeSchema) -> bool {
    node.hidden
}

/// Slot placeholder, by marker or by component name
pub fn is_slot_node(node: &NodeSchema) -> bool {
    node.slot || node.component_name == SLOT_COMPONENT
}

/// Node represents a repeated element
pub fn has_loop(node: &NodeSchema) -> bool {
    match &node.loop_marker {
        Some(LoopMarker::Enabled(enabled)) => *enabled,
        Some(LoopMarker::Binding(binding)) => !binding.trim().is_empty(),
        Some(LoopMarker::Config(_)) => true,
        None => false,
    }
}

/// Node carries an explicit absolute-position override
pub fn is_fixed_node(node: &NodeSchema) -> bool {
    node.layout_hints.fixed
}
