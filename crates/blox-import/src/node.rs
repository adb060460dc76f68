//! Normalized design nodes, as sent by the design-surface traversal.

use blox_core::ImportError;
use serde::{Deserialize, Serialize};

/// Node types the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Frame,
    Group,
    Rectangle,
    Ellipse,
    Text,
    Component,
    Instance,
    #[serde(other)]
    Unknown,
}

/// Linear RGB with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// How an image paint fits its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageScaleMode {
    #[default]
    Fill,
    Fit,
    Tile,
    Crop,
}

/// A fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgb,
        #[serde(default = "one")]
        opacity: f64,
        #[serde(default = "yes")]
        visible: bool,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default)]
        scale_mode: ImageScaleMode,
        #[serde(default = "one")]
        opacity: f64,
        #[serde(default = "yes")]
        visible: bool,
    },
    /// Gradients, video and anything newer.
    #[serde(other)]
    Other,
}

impl Paint {
    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid { visible, .. } | Paint::Image { visible, .. } => *visible,
            Paint::Other => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    #[serde(default)]
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
}

/// One node of the selected design tree.
///
/// Positions are relative to the parent node's coordinate space, except that
/// group children share their group's parent space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "yes")]
    pub visible: bool,
    #[serde(default = "one")]
    pub opacity: f64,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub stroke_weight: f64,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub clips_content: bool,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub font_name: Option<FontName>,
    #[serde(default)]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default)]
    pub text_align_vertical: Option<TextAlignVertical>,
    #[serde(default)]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    /// A node with only a type and name set.
    pub fn new(node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            node_type,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            visible: true,
            opacity: 1.0,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: 0.0,
            corner_radius: 0.0,
            clips_content: false,
            characters: None,
            font_size: None,
            font_name: None,
            text_align_horizontal: None,
            text_align_vertical: None,
            children: Vec::new(),
        }
    }

    /// The paint drawn on top: the last visible one.
    pub fn top_fill(&self) -> Option<&Paint> {
        self.fills.iter().rev().find(|paint| paint.is_visible())
    }

    pub fn top_stroke(&self) -> Option<&Paint> {
        self.strokes.iter().rev().find(|paint| paint.is_visible())
    }

    /// Reject geometry that cannot be written as offsets.
    pub fn check_geometry(&self) -> Result<(), ImportError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
            ("opacity", self.opacity),
            ("strokeWeight", self.stroke_weight),
            ("cornerRadius", self.corner_radius),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ImportError::InvalidNode(format!(
                    "'{}' has a non-finite {}",
                    self.name, field
                )));
            }
        }
        Ok(())
    }
}

/// Parse a JSON array of design nodes.
pub fn parse_nodes(json: &str) -> Result<Vec<DesignNode>, ImportError> {
    serde_json::from_str(json).map_err(|e| ImportError::InvalidNode(e.to_string()))
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}
