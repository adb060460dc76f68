//! Design nodes to scene entities.

use crate::node::{
    DesignNode, FontName, ImageScaleMode, NodeType, Paint, TextAlignHorizontal, TextAlignVertical,
};
use blox_core::enums::{
    ApplyStrokeMode, FontStyle, FontWeight, ScaleType, TextXAlignment, TextYAlignment,
};
use blox_core::{Color3, EntityId, Font, ImportError, Result, UDim, UDim2};
use blox_instance::classes::{Frame, ImageLabel, ScreenGui, TextLabel, UICorner, UIStroke};
use blox_instance::props::{GuiObjectProps, TextProps};
use blox_instance::{Class, Entity, Scene};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// How imported nodes are placed in the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    /// Parent every top-level node under one ScreenGui.
    pub wrap_in_screen_gui: bool,
    pub screen_gui_name: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            wrap_in_screen_gui: true,
            screen_gui_name: "BloxUI".to_string(),
        }
    }
}

impl ImportOptions {
    pub fn from_json(json: &str) -> std::result::Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::InvalidOptions(e.to_string()))
    }
}

/// Build a scene from `nodes`.
///
/// Returns the scene and the ids to export: the wrapping ScreenGui, or every
/// imported top-level entity. Top-level nodes are shifted so the selection's
/// top-left corner sits at the origin. Nothing importable yields no roots.
pub fn import(nodes: &[DesignNode], options: &ImportOptions) -> Result<(Scene, Vec<EntityId>)> {
    let mut importer = Importer {
        scene: Scene::new(),
    };

    let top: Vec<&DesignNode> = nodes
        .iter()
        .filter(|node| importable(node))
        .collect();
    if top.is_empty() {
        warn!(nodes = nodes.len(), "No importable design nodes");
        return Ok((importer.scene, Vec::new()));
    }
    let origin_x = top.iter().map(|node| node.x).fold(f64::INFINITY, f64::min);
    let origin_y = top.iter().map(|node| node.y).fold(f64::INFINITY, f64::min);

    let gui = options.wrap_in_screen_gui.then(|| {
        importer
            .scene
            .insert(Entity::new(ScreenGui::default()).with_name(options.screen_gui_name.clone()))
    });

    let mut roots = Vec::new();
    for node in top {
        if let Some(id) = importer.node(node, gui, (origin_x, origin_y))? {
            roots.push(id);
        }
    }

    info!(entities = importer.scene.len(), roots = roots.len(), "Imported design nodes");
    match gui {
        Some(gui) => Ok((importer.scene, vec![gui])),
        None => Ok((importer.scene, roots)),
    }
}

fn importable(node: &DesignNode) -> bool {
    if node.node_type == NodeType::Unknown {
        warn!(node = %node.id, name = %node.name, "Skipping unsupported design node");
        return false;
    }
    true
}

struct Importer {
    scene: Scene,
}

impl Importer {
    /// Insert `node` and its subtree; `origin` is the parent space's
    /// top-left corner in the node's coordinates.
    fn node(
        &mut self,
        node: &DesignNode,
        parent: Option<EntityId>,
        origin: (f64, f64),
    ) -> Result<Option<EntityId>> {
        if !importable(node) {
            return Ok(None);
        }
        node.check_geometry()?;
        debug!(node = %node.id, name = %node.name, kind = ?node.node_type, "Importing design node");

        let mut gui = GuiObjectProps {
            border_size_pixel: 0,
            clips_descendants: node.clips_content,
            position: UDim2::from_offset(
                offset(node.x - origin.0),
                offset(node.y - origin.1),
            ),
            rotation: -node.rotation,
            size: UDim2::from_offset(offset(node.width), offset(node.height)),
            visible: node.visible,
            ..GuiObjectProps::default()
        };

        let class: Class = match node.node_type {
            NodeType::Text => {
                gui.background_transparency = 1.0;
                TextLabel {
                    gui,
                    text: text_props(node)?,
                }
                .into()
            }
            NodeType::Group => {
                gui.background_transparency = 1.0;
                Frame {
                    gui,
                    ..Frame::default()
                }
                .into()
            }
            _ => match node.top_fill() {
                Some(Paint::Image {
                    scale_mode,
                    opacity,
                    ..
                }) => {
                    gui.background_transparency = 1.0;
                    let mut label = ImageLabel {
                        gui,
                        ..ImageLabel::default()
                    };
                    label.image.scale_type = scale_type(*scale_mode);
                    label.image.image_transparency = transparency(opacity * node.opacity);
                    label.into()
                }
                Some(Paint::Solid { color, opacity, .. }) => {
                    gui.background_color3 = Color3::from_unit(color.r, color.g, color.b)?;
                    gui.background_transparency = transparency(opacity * node.opacity);
                    Frame {
                        gui,
                        ..Frame::default()
                    }
                    .into()
                }
                _ => {
                    gui.background_transparency = 1.0;
                    Frame {
                        gui,
                        ..Frame::default()
                    }
                    .into()
                }
            },
        };

        let mut entity = Entity::new(class);
        if !node.name.is_empty() {
            entity = entity.with_name(node.name.clone());
        }
        if let Some(parent) = parent {
            entity = entity.with_parent(parent);
        }
        let id = self.scene.insert(entity);

        if node.node_type == NodeType::Ellipse {
            self.scene.insert(
                Entity::new(UICorner {
                    corner_radius: UDim::from_scale(0.5),
                })
                .with_parent(id),
            );
        } else if node.corner_radius > 0.0 {
            self.scene.insert(
                Entity::new(UICorner {
                    corner_radius: UDim::from_offset(offset(node.corner_radius)),
                })
                .with_parent(id),
            );
        }

        if node.node_type != NodeType::Text && node.stroke_weight > 0.0 {
            if let Some(Paint::Solid { color, opacity, .. }) = node.top_stroke() {
                self.scene.insert(
                    Entity::new(UIStroke {
                        apply_stroke_mode: ApplyStrokeMode::Border,
                        color: Color3::from_unit(color.r, color.g, color.b)?,
                        thickness: node.stroke_weight,
                        transparency: transparency(*opacity),
                        ..UIStroke::default()
                    })
                    .with_parent(id),
                );
            }
        }

        // Group children live in the group's parent space.
        let child_origin = if node.node_type == NodeType::Group {
            (node.x, node.y)
        } else {
            (0.0, 0.0)
        };
        for child in &node.children {
            self.node(child, Some(id), child_origin)?;
        }

        Ok(Some(id))
    }
}

fn text_props(node: &DesignNode) -> Result<TextProps> {
    let mut text = TextProps::with_text(node.characters.clone().unwrap_or_default());
    text.text_wrapped = true;
    if let Some(size) = node.font_size.filter(|size| size.is_finite() && *size > 0.0) {
        text.text_size = size;
    }
    if let Some(font) = &node.font_name {
        text.font_face = font_face(font);
    }
    if let Some(Paint::Solid { color, opacity, .. }) = node.top_fill() {
        text.text_color3 = Color3::from_unit(color.r, color.g, color.b)?;
        text.text_transparency = transparency(opacity * node.opacity);
    }
    text.text_x_alignment = match node.text_align_horizontal {
        Some(TextAlignHorizontal::Center) => TextXAlignment::Center,
        Some(TextAlignHorizontal::Right) => TextXAlignment::Right,
        Some(TextAlignHorizontal::Left | TextAlignHorizontal::Justified) | None => {
            TextXAlignment::Left
        }
    };
    text.text_y_alignment = match node.text_align_vertical {
        Some(TextAlignVertical::Center) => TextYAlignment::Center,
        Some(TextAlignVertical::Bottom) => TextYAlignment::Bottom,
        Some(TextAlignVertical::Top) | None => TextYAlignment::Top,
    };
    Ok(text)
}

/// Map a design font onto a Roblox font family asset.
pub fn font_face(font: &FontName) -> Font {
    let family: String = font
        .family
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let family = if family.is_empty() {
        Font::SOURCE_SANS_PRO.to_string()
    } else {
        format!("rbxasset://fonts/families/{}.json", family)
    };

    let style = font.style.to_ascii_lowercase().replace([' ', '-'], "");
    let weight = [
        ("thin", 100),
        ("extralight", 200),
        ("ultralight", 200),
        ("light", 300),
        ("medium", 500),
        ("semibold", 600),
        ("demibold", 600),
        ("extrabold", 800),
        ("ultrabold", 800),
        ("bold", 700),
        ("black", 900),
        ("heavy", 900),
    ]
    .iter()
    .find(|(name, _)| style.contains(name))
    .map(|&(_, weight)| FontWeight::from_numeric(weight))
    .unwrap_or(FontWeight::Regular);
    let style = if style.contains("italic") {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    };

    Font::new(family, weight, style)
}

fn scale_type(mode: ImageScaleMode) -> ScaleType {
    match mode {
        ImageScaleMode::Fill => ScaleType::Crop,
        ImageScaleMode::Fit => ScaleType::Fit,
        ImageScaleMode::Tile => ScaleType::Tile,
        ImageScaleMode::Crop => ScaleType::Crop,
    }
}

fn transparency(opacity: f64) -> f64 {
    1.0 - opacity.clamp(0.0, 1.0)
}

fn offset(value: f64) -> i32 {
    value.round() as i32
}
