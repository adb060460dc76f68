//! Roblox instance records and their serializers.
//!
//! Entities are built from per-class records ([`classes`]) that compose the
//! shared property groups in [`props`], owned by a [`Scene`] arena, and
//! written out either as a Luau script ([`script`]) or as rbxmx items
//! ([`markup`]).

pub mod classes;
pub mod entity;
pub mod kind;
pub mod markup;
pub mod naming;
pub mod props;
pub mod scene;
pub mod script;

pub use entity::{Class, Entity};
pub use kind::{Category, Kind, RefTarget};
pub use markup::{default_item, wrap_document, MarkupWriter};
pub use props::{PropertyEntry, PropertyList};
pub use scene::Scene;
pub use script::ScriptWriter;
