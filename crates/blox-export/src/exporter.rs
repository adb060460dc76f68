//! Turns a conversion request into an artifact or a preview.

use crate::output::{CodeBlock, ConversionRequest, ExportOutput, FileKind, OutputFile, RunMode};
use crate::session::ExportSession;
use blox_core::{ExportError, Result};
use blox_instance::{markup, script, Scene};
use tracing::{debug, info};

/// Title of the script preview.
pub const SCRIPT_TITLE: &str = "Luau";
/// Title of the model preview.
pub const MARKUP_TITLE: &str = "Roblox Model";

/// Renders scenes against one [`ExportSession`].
///
/// No IO happens here; hand files to an
/// [`ArtifactSink`](crate::persist::ArtifactSink) to save them.
#[derive(Debug, Clone, Copy)]
pub struct Exporter<'s> {
    session: &'s ExportSession,
}

impl<'s> Exporter<'s> {
    pub fn new(session: &'s ExportSession) -> Self {
        Self { session }
    }

    pub fn export(&self, scene: &Scene, request: &ConversionRequest) -> Result<ExportOutput> {
        if request.roots.is_empty() {
            return Err(ExportError::EmptySelection.into());
        }
        debug!(mode = ?request.mode, roots = request.roots.len(), "Exporting selection");

        match request.mode {
            RunMode::Script => {
                let content = script::generate(scene, &request.roots)?;
                Ok(ExportOutput::File(self.file(FileKind::Lua, content)))
            }
            RunMode::Markup => {
                let items = markup::generate(scene, &request.roots)?;
                let content = markup::wrap_document(&items);
                Ok(ExportOutput::File(self.file(FileKind::Rbxmx, content)))
            }
            RunMode::Codegen => {
                let blocks = vec![
                    CodeBlock {
                        title: SCRIPT_TITLE.to_string(),
                        language: "LUA".to_string(),
                        code: script::generate(scene, &request.roots)?,
                    },
                    CodeBlock {
                        title: MARKUP_TITLE.to_string(),
                        language: "XML".to_string(),
                        code: markup::wrap_document(&markup::generate(scene, &request.roots)?),
                    },
                ];
                Ok(ExportOutput::Preview { blocks })
            }
        }
    }

    /// Name only claimed once the content rendered.
    fn file(&self, kind: FileKind, content: String) -> OutputFile {
        let name = self.session.next_name(kind);
        info!(file = %name, kind = %kind, bytes = content.len(), "Rendered export");
        OutputFile {
            name,
            kind,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blox_core::{BloxError, ConversionError, EntityId};
    use blox_instance::{Entity, Kind};

    fn frame_scene() -> (Scene, EntityId) {
        let mut scene = Scene::new();
        let frame = scene.insert(Entity::of_kind(Kind::Frame));
        (scene, frame)
    }

    #[test]
    fn test_empty_selection() {
        let session = ExportSession::new();
        let scene = Scene::new();
        let err = Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Script, vec![]))
            .unwrap_err();
        assert!(matches!(err, BloxError::Export(ExportError::EmptySelection)));
        assert_eq!(session.issued(FileKind::Lua), 0);
    }

    #[test]
    fn test_script_file() {
        let session = ExportSession::new();
        let (scene, frame) = frame_scene();
        let output = Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Script, vec![frame]))
            .unwrap();
        let file = output.file().unwrap();
        assert_eq!(file.name, "blox_ui_lua");
        assert_eq!(file.kind, FileKind::Lua);
        assert!(file.content.starts_with("local frame = Instance.new(\"Frame\")\n"));
        assert!(file.content.ends_with("frame.Style = Enum.FrameStyle.Custom"));
    }

    #[test]
    fn test_failed_export_keeps_counter() {
        let session = ExportSession::new();
        let scene = Scene::new();
        let err = Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Markup, vec![EntityId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            BloxError::MarkupConversion(ConversionError::MissingEntity(_))
        ));
        assert_eq!(session.issued(FileKind::Rbxmx), 0);
    }

    #[test]
    fn test_codegen_leaves_counters() {
        let session = ExportSession::new();
        let (scene, frame) = frame_scene();
        let output = Exporter::new(&session)
            .export(&scene, &ConversionRequest::new(RunMode::Codegen, vec![frame]))
            .unwrap();

        let blocks = output.blocks();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language, "LUA");
        assert_eq!(blocks[1].language, "XML");
        assert!(blocks[1].code.starts_with("<roblox "));
        assert_eq!(session.issued(FileKind::Lua), 0);
        assert_eq!(session.issued(FileKind::Rbxmx), 0);
    }
}
