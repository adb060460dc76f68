//! Luau script generation.
//!
//! Each entity becomes a block:
//!
//! ```text
//! local frame = Instance.new("Frame")
//! frame.Name = "Frame"
//! frame.Archivable = true
//! ...
//! frame.Style = Enum.FrameStyle.Custom
//! ```
//!
//! Children follow their parent and end with a `Parent` assignment.
//! References to entities declared further down, including a parent
//! selected after its child, are assigned once the whole tree has been
//! written (see [`ScriptWriter::finish`]).

use crate::naming::VariableNames;
use crate::props::PropertyEntry;
use crate::scene::Scene;
use blox_core::{BloxError, ConversionError, EntityId, Format, Result};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// A reference that could not be assigned inline.
#[derive(Debug, Clone)]
struct PendingLink {
    variable: String,
    property: &'static str,
    target: EntityId,
}

/// Writes the entities reachable from a set of roots as Luau.
#[derive(Debug)]
pub struct ScriptWriter<'a> {
    scene: &'a Scene,
    included: HashSet<EntityId>,
    names: VariableNames,
    variables: HashMap<EntityId, String>,
    pending: Vec<PendingLink>,
}

impl<'a> ScriptWriter<'a> {
    /// Prepare to write `roots` and their descendants.
    pub fn new(scene: &'a Scene, roots: &[EntityId]) -> Result<Self> {
        let mut included = HashSet::new();
        for &root in roots {
            scene.entity(root).map_err(BloxError::script)?;
            included.extend(scene.subtree(root));
        }
        Ok(Self {
            scene,
            included,
            names: VariableNames::new(),
            variables: HashMap::new(),
            pending: Vec::new(),
        })
    }

    /// The block for `root` followed by the blocks of its descendants.
    pub fn write_root(&mut self, root: EntityId) -> Result<String> {
        let mut blocks = Vec::new();
        for id in self.scene.subtree(root) {
            if self.variables.contains_key(&id) {
                continue;
            }
            blocks.push(self.write_entity(id).map_err(BloxError::script)?);
        }
        Ok(blocks.join("\n"))
    }

    /// Assignments for references that pointed further down the script.
    pub fn finish(self) -> Vec<String> {
        self.pending
            .iter()
            .filter_map(|link| {
                self.variables.get(&link.target).map(|target| {
                    format!("{}.{} = {}", link.variable, link.property, target)
                })
            })
            .collect()
    }

    fn write_entity(&mut self, id: EntityId) -> std::result::Result<String, ConversionError> {
        let entity = self.scene.entity(id)?;
        let variable = self.names.claim(entity.name());
        debug!(entity = %id, class = %entity.kind(), variable = %variable, "Writing script block");

        let mut lines = vec![format!(
            "local {} = Instance.new(\"{}\")",
            variable,
            entity.kind().class_name()
        )];

        let list = entity.properties(Format::Script);
        for entry in list.entries() {
            match entry {
                PropertyEntry::Rendered { name, text } => {
                    lines.push(format!("{}.{} = {}", variable, name, text));
                }
                PropertyEntry::Reference {
                    name,
                    target,
                    expects,
                } => {
                    let value = match target {
                        None => "nil".to_string(),
                        Some(target) => {
                            let referenced = self.scene.entity(*target)?;
                            if !expects.accepts(referenced.kind()) {
                                return Err(ConversionError::ReferenceKind {
                                    property: *name,
                                    expected: expects.to_string(),
                                    found: referenced.kind().to_string(),
                                });
                            }
                            if let Some(declared) = self.variables.get(target) {
                                declared.clone()
                            } else if self.included.contains(target) {
                                self.pending.push(PendingLink {
                                    variable: variable.clone(),
                                    property: *name,
                                    target: *target,
                                });
                                continue;
                            } else {
                                warn!(
                                    entity = %id,
                                    property = *name,
                                    target = %target,
                                    "Reference points outside the exported tree, writing nil"
                                );
                                "nil".to_string()
                            }
                        }
                    };
                    lines.push(format!("{}.{} = {}", variable, name, value));
                }
            }
        }

        if let Some(parent) = entity.parent() {
            if let Some(parent_variable) = self.variables.get(&parent) {
                lines.push(format!("{}.Parent = {}", variable, parent_variable));
            } else if self.included.contains(&parent)
                && !self.scene.subtree(id).contains(&parent)
            {
                self.pending.push(PendingLink {
                    variable: variable.clone(),
                    property: "Parent",
                    target: parent,
                });
            }
        }

        self.variables.insert(id, variable);
        Ok(lines.join("\n"))
    }
}

/// Write a complete script for `roots`: one block per entity, then links.
pub fn generate(scene: &Scene, roots: &[EntityId]) -> Result<String> {
    let mut writer = ScriptWriter::new(scene, roots)?;
    let mut lines = Vec::new();
    for &root in roots {
        lines.push(writer.write_root(root)?);
    }
    lines.extend(writer.finish());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{Frame, ViewportFrame};
    use crate::entity::Entity;
    use crate::kind::Kind;
    use crate::props::GuiObjectProps;

    #[test]
    fn test_frame_block_shape() {
        let mut scene = Scene::new();
        let frame = scene.insert(Entity::of_kind(Kind::Frame));
        let script = generate(&scene, &[frame]).unwrap();
        let lines: Vec<&str> = script.lines().collect();

        assert_eq!(lines[0], "local frame = Instance.new(\"Frame\")");
        assert_eq!(lines[1], "frame.Name = \"Frame\"");
        assert_eq!(lines[2], "frame.Archivable = true");
        assert!(lines.contains(&"frame.BackgroundColor3 = Color3.fromRGB(255, 255, 255)"));
        assert!(lines.contains(&"frame.RootLocalizationTable = nil"));
        assert!(lines.contains(&"frame.NextSelectionDown = nil"));
        assert_eq!(lines.last(), Some(&"frame.Style = Enum.FrameStyle.Custom"));
    }

    #[test]
    fn test_non_archivable_block() {
        let mut scene = Scene::new();
        let scale = scene.insert(
            Entity::of_kind(Kind::UIScale)
                .with_name("Scale")
                .with_archivable(false),
        );
        insta::assert_snapshot!(generate(&scene, &[scale]).unwrap(), @r###"
        local scale = Instance.new("UIScale")
        scale.Name = "Scale"
        scale.Archivable = false
        scale.Scale = 1
        "###);
    }

    #[test]
    fn test_children_are_parented() {
        let mut scene = Scene::new();
        let gui = scene.insert(Entity::of_kind(Kind::ScreenGui).with_name("Menu"));
        let frame = scene.insert(Entity::of_kind(Kind::Frame).with_name("Panel").with_parent(gui));
        scene.insert(Entity::of_kind(Kind::UICorner).with_name("Corner").with_parent(frame));

        let script = generate(&scene, &[gui]).unwrap();
        assert!(script.starts_with("local menu = Instance.new(\"ScreenGui\")"));
        assert!(script.contains("local panel = Instance.new(\"Frame\")"));
        assert!(script.contains("panel.Parent = menu"));
        assert!(script.contains("corner.CornerRadius = UDim.new(0, 8)"));
        assert!(script.ends_with("corner.Parent = panel"));
        assert!(!script.contains("menu.Parent"));
    }

    #[test]
    fn test_child_selected_before_parent() {
        let mut scene = Scene::new();
        let gui = scene.insert(Entity::of_kind(Kind::ScreenGui).with_name("Menu"));
        let frame = scene.insert(Entity::of_kind(Kind::Frame).with_name("Panel").with_parent(gui));
        scene.insert(Entity::of_kind(Kind::UICorner).with_name("Corner").with_parent(frame));

        let script = generate(&scene, &[frame, gui]).unwrap();
        assert!(script.starts_with("local panel = Instance.new(\"Frame\")"));
        assert_eq!(script.matches("local panel = ").count(), 1);
        assert!(script.contains("corner.Parent = panel"));
        assert!(script.ends_with("panel.Parent = menu"));
    }

    #[test]
    fn test_parent_loop_keeps_first_root_unparented() {
        let mut scene = Scene::new();
        scene.insert(Entity::of_kind(Kind::Frame).with_name("A").with_parent(EntityId(1)));
        scene.insert(Entity::of_kind(Kind::Frame).with_name("B").with_parent(EntityId(0)));

        let script = generate(&scene, &[EntityId(0)]).unwrap();
        assert!(script.starts_with("local a = Instance.new(\"Frame\")"));
        assert!(script.ends_with("b.Parent = a"));
        assert!(!script.contains("a.Parent"));
    }

    #[test]
    fn test_forward_reference_becomes_trailing_link() {
        let mut scene = Scene::new();
        let viewport = scene.insert(Entity::new(ViewportFrame {
            current_camera: Some(EntityId(1)),
            ..ViewportFrame::default()
        }));
        scene.insert(Entity::of_kind(Kind::Camera).with_parent(viewport));

        let script = generate(&scene, &[viewport]).unwrap();
        assert!(!script.contains("viewportFrame.CurrentCamera = nil"));
        assert!(script.ends_with("viewportFrame.CurrentCamera = camera"));
    }

    #[test]
    fn test_backward_reference_is_inline() {
        let mut scene = Scene::new();
        let first = scene.insert(Entity::of_kind(Kind::TextButton).with_name("Play"));
        let second = scene.insert(Entity::new(Frame {
            gui: GuiObjectProps {
                next_selection_up: Some(first),
                ..GuiObjectProps::default()
            },
            ..Frame::default()
        }));

        let script = generate(&scene, &[first, second]).unwrap();
        assert!(script.contains("frame.NextSelectionUp = play"));
    }

    #[test]
    fn test_reference_outside_selection_is_nil() {
        let mut scene = Scene::new();
        let outside = scene.insert(Entity::of_kind(Kind::Frame));
        let frame = scene.insert(Entity::new(Frame {
            gui: GuiObjectProps {
                selection_image_object: Some(outside),
                ..GuiObjectProps::default()
            },
            ..Frame::default()
        }));

        let script = generate(&scene, &[frame]).unwrap();
        assert!(script.contains("frame.SelectionImageObject = nil"));
    }

    #[test]
    fn test_wrong_reference_kind_is_script_error() {
        let mut scene = Scene::new();
        let corner = scene.insert(Entity::of_kind(Kind::UICorner));
        let viewport = scene.insert(Entity::new(ViewportFrame {
            current_camera: Some(corner),
            ..ViewportFrame::default()
        }));

        let err = generate(&scene, &[viewport]).unwrap_err();
        match err {
            BloxError::ScriptConversion(ConversionError::ReferenceKind { property, found, .. }) => {
                assert_eq!(property, "CurrentCamera");
                assert_eq!(found, "UICorner");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_root_is_script_error() {
        let scene = Scene::new();
        assert!(matches!(
            generate(&scene, &[EntityId(3)]),
            Err(BloxError::ScriptConversion(ConversionError::MissingEntity(_)))
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let mut scene = Scene::new();
        let gui = scene.insert(Entity::of_kind(Kind::ScreenGui));
        scene.insert(Entity::of_kind(Kind::TextBox).with_parent(gui));
        assert_eq!(generate(&scene, &[gui]).unwrap(), generate(&scene, &[gui]).unwrap());
    }
}
