//! Export artifacts.

use serde::Serialize;
use std::fmt;

/// What an export should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// A `lua` file.
    Script,
    /// An `rbxmx` file.
    Markup,
    /// Inline previews of both formats.
    Codegen,
}

/// A run mode plus the entities to export.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub mode: RunMode,
    pub roots: Vec<blox_core::EntityId>,
}

impl ConversionRequest {
    pub fn new(mode: RunMode, roots: impl Into<Vec<blox_core::EntityId>>) -> Self {
        Self {
            mode,
            roots: roots.into(),
        }
    }
}

/// Kind of file an export writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Lua,
    Rbxmx,
}

impl FileKind {
    pub const ALL: [FileKind; 2] = [FileKind::Lua, FileKind::Rbxmx];

    pub fn extension(self) -> &'static str {
        match self {
            FileKind::Lua => "lua",
            FileKind::Rbxmx => "rbxmx",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A fully rendered file, not yet saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFile {
    /// Name without extension.
    pub name: String,
    pub kind: FileKind,
    pub content: String,
}

impl OutputFile {
    /// `<name>.<ext>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.kind.extension())
    }
}

/// One preview shown inline in the plugin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    pub title: String,
    pub language: String,
    pub code: String,
}

/// Result of a single export call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExportOutput {
    File(OutputFile),
    Preview { blocks: Vec<CodeBlock> },
}

impl ExportOutput {
    pub fn file(&self) -> Option<&OutputFile> {
        match self {
            ExportOutput::File(file) => Some(file),
            ExportOutput::Preview { .. } => None,
        }
    }

    pub fn blocks(&self) -> &[CodeBlock] {
        match self {
            ExportOutput::File(_) => &[],
            ExportOutput::Preview { blocks } => blocks,
        }
    }
}
