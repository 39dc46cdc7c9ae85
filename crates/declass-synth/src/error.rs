//! Errors at the descriptor interchange boundary.
//!
//! The synthesis rules themselves cannot fail; only decoding descriptors and
//! options from JSON can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("malformed descriptor document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("modifier #{index} has an empty property name")]
    EmptyModifier { index: usize },
}
