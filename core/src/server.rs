use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::{DocId, InvertedIndex};
use crate::query::{parse_query, Query};
use crate::ranker::{find_all_documents, rank, Document};
use crate::stopwords::StopWordFilter;

/// Collects stop words and settings before any document is indexed.
#[derive(Debug, Default)]
pub struct SearchServerBuilder {
    stop_words: StopWordFilter,
    config: SearchConfig,
}

impl SearchServerBuilder {
    pub fn stop_words(mut self, text: &str) -> Self {
        self.stop_words.configure(text);
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.config.max_results = max_results;
        self
    }

    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> SearchServer {
        SearchServer { stop_words: self.stop_words, index: InvertedIndex::new(), config: self.config }
    }
}

/// In-memory TF-IDF search over a fixed stop-word set.
#[derive(Debug)]
pub struct SearchServer {
    stop_words: StopWordFilter,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    pub fn builder() -> SearchServerBuilder { SearchServerBuilder::default() }

    pub fn add_document(&mut self, id: DocId, text: &str) -> Result<()> {
        self.index.add_document(id, text, &self.stop_words)
    }

    /// Id following the insertion-order convention: documents numbered from 0.
    pub fn next_document_id(&self) -> DocId { self.index.document_count() as DocId }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    pub fn stop_words(&self) -> &StopWordFilter { &self.stop_words }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn parse_query(&self, raw_query: &str) -> Query { parse_query(raw_query, &self.stop_words) }

    pub fn find_all_documents(&self, query: &Query) -> Vec<Document> {
        find_all_documents(query, &self.index)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        self.find_top_documents_with_limit(raw_query, self.config.max_results)
    }

    pub fn find_top_documents_with_limit(&self, raw_query: &str, limit: usize) -> Vec<Document> {
        rank(&self.parse_query(raw_query), &self.index, limit)
    }
}
