use crate::error::{Result, SearchError};
use crate::stopwords::StopWordFilter;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

pub type DocId = u32;

/// Term frequencies of one term, keyed by document.
pub type Postings = BTreeMap<DocId, f64>;

#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    /// term -> doc_id -> tf, where tf = occurrences / words in the document after stop-word removal
    postings: HashMap<String, Postings>,
    doc_ids: BTreeSet<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index `text` under `id`. Term frequencies are fixed at insertion.
    ///
    /// Fails without touching the index if `id` is already present or if no words remain
    /// after stop-word removal.
    pub fn add_document(&mut self, id: DocId, text: &str, stop_words: &StopWordFilter) -> Result<()> {
        if self.doc_ids.contains(&id) {
            return Err(SearchError::DuplicateDocument { id });
        }
        let words = stop_words.split_no_stop(text);
        if words.is_empty() {
            return Err(SearchError::EmptyDocument { id });
        }

        let tf = 1.0 / words.len() as f64;
        for word in &words {
            *self
                .postings
                .entry((*word).to_string())
                .or_default()
                .entry(id)
                .or_insert(0.0) += tf;
        }
        self.doc_ids.insert(id);
        debug!(doc_id = id, words = words.len(), "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.doc_ids.len() }

    pub fn frequencies_for(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    pub fn contains(&self, term: &str) -> bool { self.postings.contains_key(term) }

    pub fn contains_document(&self, id: DocId) -> bool { self.doc_ids.contains(&id) }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |p| p.len())
    }

    pub fn term_count(&self) -> usize { self.postings.len() }
}
