//! Flex Infer - Layout inference for absolutely positioned design trees
//!
//! This library reads a design tree exported from a visual design tool, where every node carries
//! an absolute pixel frame, and annotates each container with a flex-style layout: row, column,
//! or mix (absolute positioning), nested groups, gap, alignment, and padding.
//!
//! # Example
//!
//! ```rust
//! use flex_infer::{infer, LayoutType};
//!
//! let tree = infer(r#"{
//!     "id": "root", "componentName": "View",
//!     "frame": {"left": 0, "top": 0, "width": 200, "height": 50},
//!     "children": [
//!         {"id": "a", "componentName": "Text", "frame": {"left": 0, "top": 0, "width": 90, "height": 50}},
//!         {"id": "b", "componentName": "Text", "frame": {"left": 110, "top": 0, "width": 90, "height": 50}}
//!     ]
//! }"#).unwrap();
//!
//! let layout = tree.layout.unwrap();
//! assert_eq!(layout.layout_type, LayoutType::Row);
//! assert_eq!(layout.gap, 20.0);
//! ```

pub mod error;
pub mod layout;
pub mod schema;

pub use error::SchemaError;
pub use layout::{
    infer_layout, outline, ConfigError, Frame, LayoutAnnotation, LayoutConfig, LayoutItem,
    LayoutStats, LayoutType,
};
pub use schema::{parse, NodeSchema};

use thiserror::Error;

/// Errors that can occur during the inference pipeline
#[derive(Debug, Error)]
pub enum InferError {
    /// The input is not a valid design tree
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// The tolerance configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration for the complete inference pipeline
#[derive(Debug, Clone, Default)]
pub struct InferConfig {
    /// Layout tolerances
    pub layout: LayoutConfig,
    /// Debug mode: print the layout outline to stderr
    pub debug: bool,
}

impl InferConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Infer layouts for a JSON design tree with default configuration
///
/// This is the main entry point for the library. It decodes the tree and annotates every
/// container node.
pub fn infer(source: &str) -> Result<NodeSchema, InferError> {
    infer_with_config(source, &InferConfig::default())
}

/// Infer layouts for a JSON design tree with custom configuration
///
/// # Example
///
/// ```rust
/// use flex_infer::{infer_with_config, InferConfig, LayoutConfig};
///
/// let config = InferConfig::new()
///     .with_layout(LayoutConfig::default().with_split_tolerance(2.0));
///
/// let tree = infer_with_config(r#"{"id": "leaf", "componentName": "Text"}"#, &config).unwrap();
/// assert!(tree.layout.is_none());
/// ```
pub fn infer_with_config(source: &str, config: &InferConfig) -> Result<NodeSchema, InferError> {
    let root = parse(source)?;
    config.layout.validate()?;
    let tree = infer_tree(&root, &config.layout);

    if config.debug {
        eprintln!("=== Layout Debug ===");
        eprint!("{}", outline(&tree));
        eprintln!("====================");
    }

    Ok(tree)
}

/// Infer layouts for an already decoded tree
pub fn infer_tree(root: &NodeSchema, config: &LayoutConfig) -> NodeSchema {
    infer_layout(root, config)
}
