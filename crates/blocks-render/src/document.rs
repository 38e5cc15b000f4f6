//! Block document model and the saved-JSON parser.
//!
//! A document is the editor's saved output: an ordered list of typed blocks,
//! each carrying an opaque `data` payload. The parser keeps block order and
//! never looks inside payloads; interpreting them is the handler's job.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ParseError, RenderError};

/// A single typed block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(rename = "data", default)]
    payload: Value,
}

impl Block {
    /// Create a block with the given type tag and payload.
    ///
    /// The type tag is expected to be non-empty; [`Document::parse`] enforces
    /// this for parsed input.
    #[must_use]
    pub fn new(block_type: impl Into<String>, payload: Value) -> Self {
        Self {
            id: None,
            block_type: block_type.into(),
            payload,
        }
    }

    /// Attach the editor-assigned block ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Block type tag (e.g., `"paragraph"`).
    #[must_use]
    pub fn block_type(&self) -> &str {
        &self.block_type
    }

    /// Raw payload as stored in the document.
    #[must_use]
    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Editor-assigned block ID, if the document carried one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Decode the payload into a handler-specific shape.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Payload`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, RenderError> {
        T::deserialize(&self.payload).map_err(|source| RenderError::Payload {
            block_type: self.block_type.clone(),
            source,
        })
    }
}

/// Ordered sequence of blocks. Order is rendering order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Document {
    /// Save timestamp in milliseconds, as written by the editor.
    #[serde(default)]
    pub time: Option<i64>,
    /// Editor version that produced the document.
    #[serde(default)]
    pub version: Option<String>,
    blocks: Vec<Block>,
}

impl Document {
    /// Create a document from blocks, keeping their order.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            time: None,
            version: None,
            blocks,
        }
    }

    /// Parse the editor's saved JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] for malformed JSON or a missing `blocks`
    /// array, and [`ParseError::EmptyBlockType`] for a block without a type tag.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let document: Self = serde_json::from_str(raw)?;
        if let Some(index) = document
            .blocks
            .iter()
            .position(|block| block.block_type.is_empty())
        {
            return Err(ParseError::EmptyBlockType { index });
        }
        Ok(document)
    }

    /// Blocks in rendering order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the document has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
