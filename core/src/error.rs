//! Error types for indexing.

use crate::DocId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Nothing left to index once stop words are removed.
    #[error("document {id} has no words after stop-word removal")]
    EmptyDocument { id: DocId },

    #[error("document {id} is already indexed")]
    DuplicateDocument { id: DocId },
}

pub type Result<T> = std::result::Result<T, SearchError>;
