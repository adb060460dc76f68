//! Export orchestration for Blox.
//!
//! An [`Exporter`] renders a [`Scene`](blox_instance::Scene) selection into:
//! - a Luau script artifact (`.lua`)
//! - a Roblox model artifact (`.rbxmx`)
//! - inline previews of both
//!
//! File names come from an [`ExportSession`], which lives as long as the
//! plugin. Saving is left to an [`ArtifactSink`].

pub mod exporter;
pub mod output;
pub mod persist;
pub mod session;

pub use exporter::Exporter;
pub use output::{CodeBlock, ConversionRequest, ExportOutput, FileKind, OutputFile, RunMode};
pub use persist::{ArtifactSink, DirectorySink};
pub use session::{ExportOptions, ExportSession};
