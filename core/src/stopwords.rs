use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

/// Words ignored both when indexing and when parsing queries. Matching is exact.
#[derive(Debug, Default, Clone)]
pub struct StopWordFilter {
    words: BTreeSet<String>,
}

impl StopWordFilter {
    pub fn new() -> Self { Self::default() }

    /// Add every space-separated word of `text`. Repeated calls accumulate.
    pub fn configure(&mut self, text: &str) {
        for word in split_into_words(text) {
            self.words.insert(word.to_string());
        }
    }

    pub fn is_stop(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn filter<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        words.into_iter().filter(|w| !self.is_stop(w)).collect()
    }

    /// Tokenize and drop stop words in one pass.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.filter(split_into_words(text))
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
