//! WebAssembly bindings for the Blox converter.
//!
//! The plugin UI posts the selected design nodes and receives generated
//! files or previews back.
//!
//! ## Example
//!
//! ```js
//! import { BloxPlugin } from 'blox-wasm';
//!
//! const plugin = new BloxPlugin();
//!
//! // A Luau file named blox_ui_lua
//! const file = plugin.exportLua(nodes, { screenGuiName: 'Shop' });
//!
//! // Or route a raw UI message
//! const result = plugin.handleMessage({ type: 'codegen', nodes });
//! ```

use blox_core::Result;
use blox_export::{
    CodeBlock, ConversionRequest, ExportOptions, ExportOutput, ExportSession, Exporter,
    OutputFile, RunMode,
};
use blox_import::{import, DesignNode, ImportOptions};
use tracing::debug;
use wasm_bindgen::prelude::*;

mod message;

pub use message::PluginMessage;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// One converter instance per plugin run.
///
/// File name counters live here, so repeated exports from the same plugin
/// session get distinct names.
#[wasm_bindgen]
pub struct BloxPlugin {
    session: ExportSession,
}

#[wasm_bindgen]
impl BloxPlugin {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ExportSession::new(),
        }
    }

    /// Create a plugin with export options (`{ baseName }`).
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(options: JsValue) -> std::result::Result<BloxPlugin, JsError> {
        let options: ExportOptions = if options.is_undefined() || options.is_null() {
            ExportOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("Invalid export options: {}", e)))?
        };
        Ok(Self {
            session: ExportSession::with_options(options),
        })
    }

    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Handle a `{ type, nodes, options }` message from the UI.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&self, message: JsValue) -> std::result::Result<JsValue, JsError> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(message)
            .map_err(|e| JsError::new(&format!("Invalid message: {}", e)))?;
        let output = PluginMessage::from_value(value)
            .and_then(|message| self.dispatch(message))
            .map_err(js_error)?;
        to_js(&output)
    }

    /// Convert nodes to a Luau script file.
    #[wasm_bindgen(js_name = exportLua)]
    pub fn export_lua(
        &self,
        nodes: JsValue,
        options: JsValue,
    ) -> std::result::Result<JsValue, JsError> {
        let file = self
            .export_file(RunMode::Script, &from_js_nodes(nodes)?, &from_js_options(options)?)
            .map_err(js_error)?;
        to_js(&file)
    }

    /// Convert nodes to a Roblox model file.
    #[wasm_bindgen(js_name = exportRbxmx)]
    pub fn export_rbxmx(
        &self,
        nodes: JsValue,
        options: JsValue,
    ) -> std::result::Result<JsValue, JsError> {
        let file = self
            .export_file(RunMode::Markup, &from_js_nodes(nodes)?, &from_js_options(options)?)
            .map_err(js_error)?;
        to_js(&file)
    }

    /// Previews of both formats.
    #[wasm_bindgen]
    pub fn codegen(
        &self,
        nodes: JsValue,
        options: JsValue,
    ) -> std::result::Result<JsValue, JsError> {
        let blocks = self
            .preview(&from_js_nodes(nodes)?, &from_js_options(options)?)
            .map_err(js_error)?;
        to_js(&blocks)
    }
}

impl Default for BloxPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl BloxPlugin {
    /// Parse and run a JSON message.
    pub fn handle(&self, json: &str) -> Result<ExportOutput> {
        self.dispatch(PluginMessage::from_json(json)?)
    }

    pub fn dispatch(&self, message: PluginMessage) -> Result<ExportOutput> {
        debug!(mode = ?message.mode, nodes = message.nodes.len(), "Handling plugin message");
        self.run(message.mode, &message.nodes, &message.options)
    }

    pub fn export_file(
        &self,
        mode: RunMode,
        nodes: &[DesignNode],
        options: &ImportOptions,
    ) -> Result<OutputFile> {
        match self.run(mode, nodes, options)? {
            ExportOutput::File(file) => Ok(file),
            ExportOutput::Preview { .. } => Err(blox_core::BloxError::UnhandledInput(
                "preview requested where a file was expected".to_string(),
            )),
        }
    }

    pub fn preview(&self, nodes: &[DesignNode], options: &ImportOptions) -> Result<Vec<CodeBlock>> {
        match self.run(RunMode::Codegen, nodes, options)? {
            ExportOutput::Preview { blocks } => Ok(blocks),
            ExportOutput::File(_) => Ok(Vec::new()),
        }
    }

    fn run(
        &self,
        mode: RunMode,
        nodes: &[DesignNode],
        options: &ImportOptions,
    ) -> Result<ExportOutput> {
        let (scene, roots) = import(nodes, options)?;
        Exporter::new(&self.session).export(&scene, &ConversionRequest::new(mode, roots))
    }
}

fn from_js_nodes(nodes: JsValue) -> std::result::Result<Vec<DesignNode>, JsError> {
    serde_wasm_bindgen::from_value(nodes)
        .map_err(|e| JsError::new(&format!("Invalid design nodes: {}", e)))
}

fn from_js_options(options: JsValue) -> std::result::Result<ImportOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ImportOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsError::new(&format!("Invalid import options: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn js_error(err: blox_core::BloxError) -> JsError {
    JsError::new(&err.to_string())
}
