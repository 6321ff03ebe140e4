pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranker;
pub mod server;
pub mod stopwords;
pub mod tokenizer;

pub use config::{SearchConfig, MAX_RESULT_DOCUMENT_COUNT};
pub use error::{Result, SearchError};
pub use index::{DocId, InvertedIndex, Postings};
pub use query::Query;
pub use ranker::Document;
pub use server::{SearchServer, SearchServerBuilder};
pub use stopwords::StopWordFilter;
