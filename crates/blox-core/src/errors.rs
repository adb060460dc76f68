//! Error types for the Blox converter.

use crate::ids::EntityId;
use thiserror::Error;

/// Result alias used across the Blox crates.
pub type Result<T> = std::result::Result<T, BloxError>;

/// Top-level error type for the converter.
///
/// Script and model conversion failures carry the same [`ConversionError`]
/// payload but are distinct variants so callers can report them separately.
#[derive(Debug, Error)]
pub enum BloxError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Script conversion failed: {0}")]
    ScriptConversion(ConversionError),

    #[error("Model conversion failed: {0}")]
    MarkupConversion(ConversionError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Import(#[from] ImportError),

    /// Not a data error: the plugin UI asked to switch pages.
    #[error("Navigation to '{page}' requested")]
    Navigation { page: String },

    #[error("Unhandled input: {0}")]
    UnhandledInput(String),
}

impl BloxError {
    /// Wrap a conversion error raised while generating a script.
    pub fn script(err: ConversionError) -> Self {
        BloxError::ScriptConversion(err)
    }

    /// Wrap a conversion error raised while generating a model file.
    pub fn markup(err: ConversionError) -> Self {
        BloxError::MarkupConversion(err)
    }
}

/// Malformed or out-of-domain primitive inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Color channel {channel} out of range: {value} (expected 0..=255)")]
    ColorChannel { channel: char, value: f64 },

    #[error("Color component {channel} out of range: {value} (expected 0..=1)")]
    UnitColorChannel { channel: char, value: f64 },

    #[error("Value for '{field}' must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Sequence needs at least two keypoints, got {count}")]
    TooFewKeypoints { count: usize },

    #[error("Keypoint time {time} out of range (expected 0..=1)")]
    KeypointTime { time: f64 },

    #[error("Keypoint times must ascend: {previous} followed by {time}")]
    KeypointOrder { previous: f64, time: f64 },

    #[error("Sequence must start at time 0 and end at time 1, got {first}..{last}")]
    SequenceBounds { first: f64, last: f64 },

    #[error("Keypoint envelope must be non-negative, got {envelope}")]
    NegativeEnvelope { envelope: f64 },
}

/// Serialization requested on something no template covers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown instance class: {0}")]
    UnknownKind(String),

    #[error("Entity {0} does not exist in the scene")]
    MissingEntity(EntityId),

    #[error("Property '{property}' expects {expected}, found {found}")]
    ReferenceKind {
        property: &'static str,
        expected: String,
        found: String,
    },
}

/// Errors during export and hand-off to storage.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: at least one root entity is required")]
    EmptySelection,

    #[error("Failed to persist '{file}': {reason}")]
    Persistence { file: String, reason: String },
}

/// Errors while reading normalized design nodes.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid design node data: {0}")]
    InvalidNode(String),

    #[error("Invalid import options: {0}")]
    InvalidOptions(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_variants_are_distinct() {
        let script = BloxError::script(ConversionError::UnknownKind("Part".into()));
        let markup = BloxError::markup(ConversionError::UnknownKind("Part".into()));

        assert!(matches!(script, BloxError::ScriptConversion(_)));
        assert!(matches!(markup, BloxError::MarkupConversion(_)));
        assert_eq!(
            script.to_string(),
            "Script conversion failed: Unknown instance class: Part"
        );
        assert_eq!(
            markup.to_string(),
            "Model conversion failed: Unknown instance class: Part"
        );
    }

    #[test]
    fn test_validation_converts_into_blox_error() {
        let err: BloxError = ValidationError::TooFewKeypoints { count: 1 }.into();
        assert!(matches!(err, BloxError::Validation(_)));
    }
}
