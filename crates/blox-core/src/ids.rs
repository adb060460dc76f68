//! Entity handles.

use std::fmt;

/// Non-owning handle to an entity stored in a scene arena.
///
/// Parent links and cross references between entities are expressed with
/// these handles, so no entity ever owns another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Position of the entity in its arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Model-file referent for this entity.
    pub fn referent(self) -> String {
        format!("RBX{}", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
