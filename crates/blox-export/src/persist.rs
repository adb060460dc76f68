//! Saving rendered artifacts.

use crate::output::OutputFile;
use blox_core::ExportError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for finished artifacts.
pub trait ArtifactSink {
    fn persist(&self, file: &OutputFile) -> Result<(), ExportError>;
}

/// Writes each artifact as `<name>.<ext>` inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `file` will be written.
    pub fn path_for(&self, file: &OutputFile) -> PathBuf {
        self.root.join(file.file_name())
    }
}

impl ArtifactSink for DirectorySink {
    fn persist(&self, file: &OutputFile) -> Result<(), ExportError> {
        let path = self.path_for(file);
        let failed = |e: std::io::Error| ExportError::Persistence {
            file: file.file_name(),
            reason: e.to_string(),
        };
        fs::create_dir_all(&self.root).map_err(failed)?;
        fs::write(&path, &file.content).map_err(failed)?;
        info!(path = %path.display(), bytes = file.content.len(), "Saved artifact");
        Ok(())
    }
}
