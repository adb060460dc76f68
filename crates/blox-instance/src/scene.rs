//! Arena owning every entity of one conversion.

use crate::entity::Entity;
use blox_core::{ConversionError, EntityId};
use std::collections::{HashMap, HashSet};

/// Owns entities and answers tree queries over their parent handles.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    children: HashMap<EntityId, Vec<EntityId>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an entity and return its handle.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        if let Some(parent) = entity.parent() {
            self.children.entry(parent).or_default().push(id);
        }
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Like [`Scene::get`], failing when the handle is dangling.
    pub fn entity(&self, id: EntityId) -> Result<&Entity, ConversionError> {
        self.get(id).ok_or(ConversionError::MissingEntity(id))
    }

    /// Children of `id` in insertion order.
    pub fn children(&self, id: EntityId) -> &[EntityId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entities without a parent, in insertion order.
    pub fn roots(&self) -> Vec<EntityId> {
        self.iter()
            .filter(|(_, entity)| entity.parent().is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// `root` and all of its descendants, depth first, parents before
    /// children. Each entity is visited once even if parent links loop.
    pub fn subtree(&self, root: EntityId) -> Vec<EntityId> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (EntityId(index as u32), entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
