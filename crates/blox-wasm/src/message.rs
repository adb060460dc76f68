//! Messages posted by the plugin UI.

use blox_core::{BloxError, ImportError, Result};
use blox_export::RunMode;
use blox_import::{DesignNode, ImportOptions};
use serde::Deserialize;
use serde_json::Value;

/// An export request from the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginMessage {
    pub mode: RunMode,
    pub nodes: Vec<DesignNode>,
    pub options: ImportOptions,
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    nodes: Vec<DesignNode>,
    #[serde(default)]
    options: ImportOptions,
}

#[derive(Debug, Deserialize)]
struct Navigate {
    #[serde(default)]
    page: String,
}

impl PluginMessage {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| BloxError::UnhandledInput(format!("not a JSON message: {}", e)))?;
        Self::from_value(value)
    }

    /// Dispatch on the `type` field.
    ///
    /// `navigate` comes back as [`BloxError::Navigation`] so the host can
    /// switch pages; unknown types are [`BloxError::UnhandledInput`].
    pub fn from_value(value: Value) -> Result<Self> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| BloxError::UnhandledInput("message without a type".to_string()))?;

        let mode = match kind.as_str() {
            "export-lua" => RunMode::Script,
            "export-rbxmx" => RunMode::Markup,
            "codegen" => RunMode::Codegen,
            "navigate" => {
                let navigate: Navigate = serde_json::from_value(value)
                    .map_err(|e| BloxError::UnhandledInput(e.to_string()))?;
                return Err(BloxError::Navigation {
                    page: navigate.page,
                });
            }
            other => return Err(BloxError::UnhandledInput(other.to_string())),
        };

        let payload: Payload = serde_json::from_value(value)
            .map_err(|e| ImportError::InvalidNode(e.to_string()))?;
        Ok(Self {
            mode,
            nodes: payload.nodes,
            options: payload.options,
        })
    }
}
