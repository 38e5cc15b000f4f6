//! Error types for parsing and rendering.

/// Malformed source document. Rendering never starts.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Invalid JSON or missing `blocks` array.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// Block with an empty type tag.
    #[error("block {index} has an empty type")]
    EmptyBlockType {
        /// Zero-based position of the block in the document.
        index: usize,
    },
}

/// A handler could not interpret its block's payload.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Payload does not match the shape the handler expects.
    #[error("invalid {block_type} payload: {source}")]
    Payload {
        /// Type tag of the offending block.
        block_type: String,
        /// Underlying decode error.
        source: serde_json::Error,
    },

    /// Payload decoded but a field value is out of range.
    #[error("invalid {block_type} field {field}: {message}")]
    InvalidField {
        /// Type tag of the offending block.
        block_type: String,
        /// Payload field name.
        field: &'static str,
        /// What is wrong with the value.
        message: String,
    },
}

/// Error from a rendering call.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No handler registered for a block's type.
    #[error("no handler registered for block type: {0}")]
    UnknownBlockType(String),

    /// Registered handler failed on its block.
    #[error("failed to render {block_type} block: {source}")]
    Render {
        /// Type tag of the failing block.
        block_type: String,
        /// Handler error.
        source: RenderError,
    },
}

/// Strict rendering failure with whatever output was produced before it.
///
/// HTML rendering keeps the fragments of the blocks rendered before the
/// failure; Markdown rendering keeps nothing.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct PartialRender {
    /// Output accumulated before the failing block.
    pub output: String,
    /// Cause of the failure.
    #[source]
    pub error: EngineError,
}

impl PartialRender {
    /// Failure with no partial output.
    #[must_use]
    pub fn empty(error: EngineError) -> Self {
        Self {
            output: String::new(),
            error,
        }
    }
}
