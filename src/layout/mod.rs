//! Layout inference for absolutely positioned design trees
//!
//! This module takes a design tree whose nodes carry pixel frames and annotates every container
//! with a flex-style description of its children: row, column, or mix, nested groups, gap,
//! alignment, and padding.

pub mod align;
pub mod classify;
pub mod config;
pub mod determine;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod outline;
pub mod split;
pub mod types;

pub use align::{calculate_optimal_gap, content_padding, detect_alignment, needs_absolute_positioning};
pub use classify::classify;
pub use config::LayoutConfig;
pub use determine::determine_layout_type;
pub use engine::{container_layout, infer_layout};
pub use error::ConfigError;
pub use grid::detect_grid_pattern;
pub use outline::{outline, summarize, LayoutStats};
pub use split::{analyze_split, split_to_column, split_to_row};
pub use types::*;
