//! rbxmx model generation.

use crate::entity::Entity;
use crate::kind::Kind;
use crate::props::{PropertyEntry, PropertyList};
use crate::scene::Scene;
use blox_core::{BloxError, ConversionError, EntityId, Format, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;
use tracing::{debug, warn};

const HEADER: &str = concat!(
    "<roblox xmlns:xmime=\"http://www.w3.org/2005/05/xmlmime\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xsi:noNamespaceSchemaLocation=\"http://www.roblox.com/roblox.xsd\" version=\"4\">\n",
    "\t<Meta name=\"ExplicitAutoJoints\">true</Meta>\n",
    "\t<External>null</External>\n",
    "\t<External>nil</External>\n",
);

const FOOTER: &str = "</roblox>\n";

/// Wrap rendered items in the rbxmx document envelope.
pub fn wrap_document(items: &str) -> String {
    let mut out = String::with_capacity(HEADER.len() + items.len() + FOOTER.len());
    out.push_str(HEADER);
    out.push_str(items);
    if !items.is_empty() && !items.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(FOOTER);
    out
}

/// Writes the archivable entities reachable from a set of roots as
/// nested `<Item>` blocks.
///
/// Property lists are built and references checked up front so that every
/// referenced item can carry its `referent` attribute, wherever it sits in
/// the document. Each entity is written at most once, even when roots
/// overlap or parent links loop.
#[derive(Debug)]
pub struct MarkupWriter<'a> {
    scene: &'a Scene,
    properties: HashMap<EntityId, PropertyList>,
    referenced: HashSet<EntityId>,
    written: HashSet<EntityId>,
}

impl<'a> MarkupWriter<'a> {
    pub fn new(scene: &'a Scene, roots: &[EntityId]) -> Result<Self> {
        Self::prepare(scene, roots).map_err(BloxError::markup)
    }

    fn prepare(
        scene: &'a Scene,
        roots: &[EntityId],
    ) -> std::result::Result<Self, ConversionError> {
        let mut included = Vec::new();
        let mut seen = HashSet::new();
        for &root in roots {
            scene.entity(root)?;
            collect_archivable(scene, root, &mut included, &mut seen);
        }
        let included_set: HashSet<EntityId> = included.iter().copied().collect();

        let mut properties = HashMap::new();
        let mut referenced = HashSet::new();
        for &id in &included {
            let list = scene.entity(id)?.properties(Format::Markup);
            for entry in list.entries() {
                if let PropertyEntry::Reference {
                    name,
                    target: Some(target),
                    expects,
                } = entry
                {
                    let found = scene.entity(*target)?.kind();
                    if !expects.accepts(found) {
                        return Err(ConversionError::ReferenceKind {
                            property: *name,
                            expected: expects.to_string(),
                            found: found.to_string(),
                        });
                    }
                    if included_set.contains(target) {
                        referenced.insert(*target);
                    } else {
                        warn!(
                            entity = %id,
                            property = *name,
                            target = %target,
                            "Reference points outside the exported tree, writing null"
                        );
                    }
                }
            }
            properties.insert(id, list);
        }

        Ok(Self {
            scene,
            properties,
            referenced,
            written: HashSet::new(),
        })
    }

    /// The `<Item>` for `root` with its descendants nested inside, indented
    /// one level below the document element. Empty if `root` is not
    /// archivable or has already been written.
    pub fn write_root(&mut self, root: EntityId) -> String {
        let mut out = String::new();
        self.write_item(root, 1, &mut out);
        out
    }

    fn write_item(&mut self, id: EntityId, depth: usize, out: &mut String) {
        let scene = self.scene;
        let Some(entity) = scene.get(id) else {
            return;
        };
        if !self.properties.contains_key(&id) || !self.written.insert(id) {
            return;
        }
        debug!(entity = %id, class = %entity.kind(), "Writing markup item");

        let indent = "\t".repeat(depth);
        let referent = self
            .referenced
            .contains(&id)
            .then(|| id.referent());
        open_item(out, &indent, entity.kind(), referent.as_deref());
        let _ = writeln!(out, "{}\t<Properties>", indent);
        if let Some(list) = self.properties.get(&id) {
            for entry in list.entries() {
                let _ = writeln!(out, "{}\t\t{}", indent, self.render_entry(entry));
            }
        }
        let _ = writeln!(out, "{}\t</Properties>", indent);
        for &child in scene.children(id) {
            self.write_item(child, depth + 1, out);
        }
        let _ = writeln!(out, "{}</Item>", indent);
    }

    fn render_entry(&self, entry: &PropertyEntry) -> String {
        match entry {
            PropertyEntry::Rendered { text, .. } => text.clone(),
            PropertyEntry::Reference { name, target, .. } => {
                let value = target
                    .filter(|target| self.referenced.contains(target))
                    .map(|target| target.referent())
                    .unwrap_or_else(|| "null".to_string());
                format!("<Ref name=\"{}\">{}</Ref>", name, value)
            }
        }
    }
}

fn open_item(out: &mut String, indent: &str, kind: Kind, referent: Option<&str>) {
    match referent {
        Some(referent) => {
            let _ = writeln!(
                out,
                "{}<Item class=\"{}\" referent=\"{}\">",
                indent,
                kind.class_name(),
                referent
            );
        }
        None => {
            let _ = writeln!(out, "{}<Item class=\"{}\">", indent, kind.class_name());
        }
    }
}

/// Pre-order archivable entities under `id`; a non-archivable entity hides
/// its whole subtree.
fn collect_archivable(
    scene: &Scene,
    id: EntityId,
    out: &mut Vec<EntityId>,
    seen: &mut HashSet<EntityId>,
) {
    let Some(entity) = scene.get(id) else {
        return;
    };
    if !entity.archivable() || !seen.insert(id) {
        return;
    }
    out.push(id);
    for &child in scene.children(id) {
        collect_archivable(scene, child, out, seen);
    }
}

/// Roots that no other root contains, in request order.
fn outermost(scene: &Scene, roots: &[EntityId]) -> Vec<EntityId> {
    roots
        .iter()
        .copied()
        .filter(|&root| {
            !roots
                .iter()
                .any(|&other| other != root && scene.subtree(other).contains(&root))
        })
        .collect()
}

/// Write the item bodies for `roots`, without the document envelope.
///
/// A root inside another root's subtree stays nested there. Roots that
/// only contain each other through a parent loop are written in request
/// order.
pub fn generate(scene: &Scene, roots: &[EntityId]) -> Result<String> {
    let mut writer = MarkupWriter::new(scene, roots)?;
    let mut items = String::new();
    for root in outermost(scene, roots).into_iter().chain(roots.iter().copied()) {
        items.push_str(&writer.write_root(root));
    }
    Ok(items)
}

/// A default-valued item for a class name, at depth zero.
pub fn default_item(class_name: &str) -> std::result::Result<String, ConversionError> {
    let kind: Kind = class_name.parse()?;
    let mut scene = Scene::new();
    let id = scene.insert(Entity::of_kind(kind));
    let mut writer = MarkupWriter::prepare(&scene, &[id])?;
    let mut out = String::new();
    writer.write_item(id, 0, &mut out);
    Ok(out)
}
