use crate::index::{DocId, InvertedIndex};
use crate::query::Query;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ document_id = {}, relevance = {} }}", self.id, self.relevance)
    }
}

/// ln(N / df). Zero when either count is zero.
pub fn inverse_document_frequency(document_count: usize, document_frequency: usize) -> f64 {
    if document_count == 0 || document_frequency == 0 {
        return 0.0;
    }
    let idf = (document_count as f64 / document_frequency as f64).ln();
    if idf.is_finite() { idf } else { 0.0 }
}

/// Every document matching a plus word and no minus word, with its TF-IDF relevance,
/// ordered by id.
pub fn find_all_documents(query: &Query, index: &InvertedIndex) -> Vec<Document> {
    let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

    for word in &query.plus_words {
        if let Some(freqs) = index.frequencies_for(word) {
            let idf = inverse_document_frequency(index.document_count(), freqs.len());
            for (&id, &tf) in freqs {
                *relevance.entry(id).or_insert(0.0) += tf * idf;
            }
        }
    }

    for word in &query.minus_words {
        if let Some(freqs) = index.frequencies_for(word) {
            for id in freqs.keys() {
                relevance.remove(id);
            }
        }
    }

    relevance
        .into_iter()
        .map(|(id, relevance)| Document { id, relevance })
        .collect()
}

/// Highest relevance first, ties broken by ascending id.
fn by_relevance(lhs: &Document, rhs: &Document) -> Ordering {
    rhs.relevance
        .partial_cmp(&lhs.relevance)
        .unwrap_or(Ordering::Equal)
        .then(lhs.id.cmp(&rhs.id))
}

/// Rank matching documents and keep at most `limit` of them.
pub fn rank(query: &Query, index: &InvertedIndex, limit: usize) -> Vec<Document> {
    let mut matched = find_all_documents(query, index);
    let total_hits = matched.len();
    matched.sort_by(by_relevance);
    matched.truncate(limit);
    debug!(total_hits, returned = matched.len(), limit, "ranked query");
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;
    use crate::stopwords::StopWordFilter;

    fn build(stop_text: &str, docs: &[&str]) -> (InvertedIndex, StopWordFilter) {
        let mut stop = StopWordFilter::new();
        stop.configure(stop_text);
        let mut index = InvertedIndex::new();
        for (id, text) in docs.iter().enumerate() {
            index.add_document(id as DocId, text, &stop).unwrap();
        }
        (index, stop)
    }

    #[test]
    fn idf_guards_degenerate_counts() {
        assert_eq!(inverse_document_frequency(0, 0), 0.0);
        assert_eq!(inverse_document_frequency(0, 3), 0.0);
        assert_eq!(inverse_document_frequency(3, 0), 0.0);
        assert_eq!(inverse_document_frequency(4, 4), 0.0);
        assert!((inverse_document_frequency(4, 1) - 4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn relevance_is_tf_times_idf() {
        let (index, stop) = build("", &["кот пёс", "пёс", "ёж"]);
        let docs = find_all_documents(&parse_query("кот", &stop), &index);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, 0);
        assert!((docs[0].relevance - 0.5 * 3f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn minus_word_removes_document() {
        let (index, stop) = build("", &["кот пёс", "кот", "кот ёж"]);
        let docs = find_all_documents(&parse_query("кот -пёс", &stop), &index);
        let ids: Vec<DocId> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn ties_break_by_id() {
        let (index, stop) = build("", &["ёж", "кот", "пёс", "кот"]);
        let docs = rank(&parse_query("кот", &stop), &index, 5);
        let ids: Vec<DocId> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn limit_truncates() {
        let (index, stop) = build("", &["a x", "a", "a y z", "b", "a b", "a c", "a d"]);
        let query = parse_query("a", &stop);
        assert_eq!(rank(&query, &index, 5).len(), 5);
        assert_eq!(rank(&query, &index, 2).len(), 2);
        assert!(rank(&query, &index, 0).is_empty());
        assert_eq!(rank(&query, &index, 2)[0].id, 1);
    }

    #[test]
    fn display_matches_reference_format() {
        let doc = Document { id: 2, relevance: 0.5 };
        assert_eq!(doc.to_string(), "{ document_id = 2, relevance = 0.5 }");
    }
}
