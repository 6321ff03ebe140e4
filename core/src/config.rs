use serde::{Deserialize, Serialize};

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Upper bound on the number of documents a top-documents query returns.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize { MAX_RESULT_DOCUMENT_COUNT }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: default_max_results() }
    }
}
