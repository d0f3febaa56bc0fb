//! Core types for the layout inference engine

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry;

/// Axis along which frames are measured, sorted, or split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The axis at right angles to this one
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A frame as exported by a design tool, where any field may be missing
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawFrame {
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

/// An axis-aligned pixel bounding box with derived right and bottom edges
///
/// Frames read from JSON go through [`geometry::normalize`], so `right` and `bottom`
/// always agree with `left + width` and `top + height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFrame")]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Create a zero-sized frame at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// A frame is usable for geometry when every field is finite and its size is non-negative
    pub fn is_valid(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Leading edge along an axis (left or top)
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing edge along an axis (right or bottom)
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Extent along an axis (width or height)
    pub fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Smallest frame containing both frames
    pub fn union(&self, other: &Frame) -> Frame {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right.max(other.right);
        let bottom = self.bottom.max(other.bottom);
        Frame::new(left, top, right - left, bottom - top)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<RawFrame> for Frame {
    fn from(raw: RawFrame) -> Self {
        geometry::normalize(&raw)
    }
}

/// Final layout classification of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Items flow left to right
    Row,
    /// Items flow top to bottom
    Column,
    /// No clean single-axis split; children are positioned absolutely
    Mix,
}

impl LayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutType::Row => "row",
            LayoutType::Column => "column",
            LayoutType::Mix => "mix",
        }
    }

    /// Main axis of a flex direction; `Mix` has none
    pub fn main_axis(&self) -> Option<Axis> {
        match self {
            LayoutType::Row => Some(Axis::Horizontal),
            LayoutType::Column => Some(Axis::Vertical),
            LayoutType::Mix => None,
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of a container's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    /// Part of the annotation vocabulary for generators; inference does not emit it
    Justify,
    SpaceBetween,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
            HorizontalAlign::Justify => "justify",
            HorizontalAlign::SpaceBetween => "space-between",
        }
    }
}

/// Vertical placement of a container's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
    Stretch,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
            VerticalAlign::Stretch => "stretch",
        }
    }
}

/// Alignment of a container's children relative to its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    pub align_horizontal: HorizontalAlign,
    pub align_vertical: VerticalAlign,
}

impl Default for Alignment {
    fn default() -> Self {
        Self {
            align_horizontal: HorizontalAlign::Left,
            align_vertical: VerticalAlign::Top,
        }
    }
}

/// Partition of a container's immediate children, as indices into the child list
///
/// Every child index appears in exactly one bucket, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChildClassification {
    pub normal: Vec<usize>,
    pub absolute: Vec<usize>,
    pub hidden: Vec<usize>,
    pub slot: Vec<usize>,
}

impl ChildClassification {
    /// Total number of classified children
    pub fn len(&self) -> usize {
        self.normal.len() + self.absolute.len() + self.hidden.len() + self.slot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Children that take part in flex flow (normal and slot), in original order
    pub fn flow(&self) -> Vec<usize> {
        let mut flow: Vec<usize> = self.normal.iter().chain(&self.slot).copied().collect();
        flow.sort_unstable();
        flow
    }
}

/// A candidate partition of children into sequential groups along one axis
///
/// `groups` holds indices into the analyzed slice. `gaps[i]` is the signed distance between
/// group `i` and group `i + 1`; a negative value is an overlap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitResult {
    pub success: bool,
    pub groups: Vec<Vec<usize>>,
    pub gaps: Vec<f64>,
}

impl SplitResult {
    /// A failed split that keeps everything in a single group
    pub fn unsplit(count: usize) -> Self {
        let groups = if count == 0 {
            vec![]
        } else {
            vec![(0..count).collect()]
        };
        Self {
            success: false,
            groups,
            gaps: vec![],
        }
    }

    /// Population variance of the gaps (0 for fewer than two gaps)
    pub fn gap_variance(&self) -> f64 {
        if self.gaps.len() < 2 {
            return 0.0;
        }
        let n = self.gaps.len() as f64;
        let mean = self.gaps.iter().sum::<f64>() / n;
        self.gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n
    }
}

/// Outcome of choosing between the row and column split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitDecision {
    pub direction: LayoutType,
    pub result: SplitResult,
}

/// Layout type for a set of children, with the groups it is built from
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDecision {
    pub layout_type: LayoutType,
    pub groups: Vec<Vec<usize>>,
    pub gaps: Vec<f64>,
}

/// Uniform row-by-column arrangement detected among children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPattern {
    pub is_grid: bool,
    pub columns: usize,
    pub rows: usize,
}

/// Distance from a container's edges to its content bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// A child taken out of flow, with its frame relative to the container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
}

/// One entry in a container's flow: a child node or a nested virtual group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutItem {
    Node { id: String },
    Group(LayoutGroup),
}

/// A virtual container wrapping several children of a flex container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGroup {
    pub frame: Frame,
    pub layout_type: LayoutType,
    pub items: Vec<LayoutItem>,
    pub gap: f64,
    #[serde(flatten)]
    pub alignment: Alignment,
}

/// Layout metadata attached to a container node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAnnotation {
    pub layout_type: LayoutType,
    pub items: Vec<LayoutItem>,
    pub gap: f64,
    #[serde(flatten)]
    pub alignment: Alignment,
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub absolute: Vec<AbsoluteItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridPattern>,
    #[serde(default)]
    pub wrap: bool,
}
