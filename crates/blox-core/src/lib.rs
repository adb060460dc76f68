//! Core types for the Blox Roblox UI converter.
//!
//! This crate provides the foundational pieces shared by the other blox crates:
//! - Property value types (UDim2, Color3, Font, ...) that render as Luau and rbxmx
//! - Roblox enum tokens
//! - Entity handles
//! - Error types

pub mod enums;
pub mod errors;
pub mod format;
pub mod ids;
pub mod sequence;
pub mod types;

pub use errors::*;
pub use ids::EntityId;
pub use sequence::*;
pub use types::*;

/// The two textual output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Luau construct-then-assign statements.
    Script,
    /// rbxmx `<Item>`/`<Properties>` blocks.
    Markup,
}
