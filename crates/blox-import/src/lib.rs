//! Builds Blox scenes from the design nodes a plugin selection produces.
//!
//! ```ignore
//! let nodes = blox_import::parse_nodes(json)?;
//! let (scene, roots) = blox_import::import(&nodes, &ImportOptions::default())?;
//! ```

pub mod convert;
pub mod node;

pub use convert::{font_face, import, ImportOptions};
pub use node::{
    parse_nodes, DesignNode, FontName, ImageScaleMode, NodeType, Paint, Rgb, TextAlignHorizontal,
    TextAlignVertical,
};
