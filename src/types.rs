//! Core types for figma-export

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A node's axis-aligned bounding box in absolute canvas coordinates.
///
/// Width and height are floating-point pixels exactly as reported by the API.
/// The dimension filter compares them without any tolerance, so a frame of
/// 375.5px never matches a 375px target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// X coordinate of the top-left corner
    #[serde(default)]
    pub x: f64,

    /// Y coordinate of the top-left corner
    #[serde(default)]
    pub y: f64,

    /// Rendered width in pixels
    pub width: f64,

    /// Rendered height in pixels
    pub height: f64,
}

/// Node type tag as reported by the document tree.
///
/// Only [`NodeType::Frame`] is ever selected for export; every other tag is
/// traversed but never matched. Unknown tags deserialize to
/// [`NodeType::Other`] so new node kinds in the API never break parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// Root node of the file
    Document,
    /// A page canvas
    Canvas,
    /// A screen/artboard boundary
    Frame,
    /// Grouped layers
    Group,
    /// Reusable component definition
    Component,
    /// Instance of a component
    Instance,
    /// Any other tag the API may report
    #[serde(other)]
    Other,
}

/// A single node in the design document tree.
///
/// The tree is acyclic and finite; children appear in document order. Styling
/// metadata is carried opaquely and never interpreted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    /// Identifier, unique within the file
    pub id: String,

    /// Display name (not guaranteed unique)
    pub name: String,

    /// Type tag
    #[serde(rename = "type")]
    pub node_type: NodeType,

    /// Bounding box, absent for nodes without rendered extent
    #[serde(default)]
    pub absolute_bounding_box: Option<BoundingBox>,

    /// Child nodes in document order
    #[serde(default)]
    pub children: Vec<DocumentNode>,

    /// Styling metadata, passed through unused
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<serde_json::Value>,
}

/// Response envelope of the file endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct FileDocument {
    /// Display name of the file
    #[serde(default)]
    pub name: String,

    /// Root of the document tree
    pub document: DocumentNode,
}

/// Projection of a matched frame.
///
/// Produced by the tree filter in document order and consumed exactly once by
/// the export loop; never persisted beyond the run.
#[derive(Clone, Debug)]
pub struct ScreenRecord {
    /// Node identifier
    pub id: String,

    /// Frame display name
    pub name: String,

    /// Bounding box of the frame, when the document reports one
    pub bounding_box: Option<BoundingBox>,

    /// Styling metadata passthrough
    pub styles: Option<serde_json::Value>,
}

/// Exact-match target dimensions for the frame filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    /// Target width in pixels
    pub width: f64,

    /// Target height in pixels
    pub height: f64,
}

impl FrameSize {
    /// Create a target size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `bounds` matches this size exactly (no tolerance)
    pub fn matches(&self, bounds: &BoundingBox) -> bool {
        bounds.width == self.width && bounds.height == self.height
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for FrameSize {
    type Err = String;

    /// Parse a `WIDTHxHEIGHT` string such as `375x812`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("invalid frame size '{s}', expected WIDTHxHEIGHT"))?;
        let width: f64 = width
            .trim()
            .parse()
            .map_err(|_| format!("invalid width in frame size '{s}'"))?;
        let height: f64 = height
            .trim()
            .parse()
            .map_err(|_| format!("invalid height in frame size '{s}'"))?;
        Ok(Self { width, height })
    }
}

/// Image format accepted by the render endpoint.
///
/// The export loop tries formats in configured order and keeps the first one
/// that both renders and persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpg,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Document Format
    Pdf,
}

impl ImageFormat {
    /// Value sent as the render endpoint's `format` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Svg => "svg",
            ImageFormat::Pdf => "pdf",
        }
    }

    /// Filename extension, identical to the wire value
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpg),
            "svg" => Ok(ImageFormat::Svg),
            "pdf" => Ok(ImageFormat::Pdf),
            other => Err(format!("unknown image format '{other}'")),
        }
    }
}
