use crate::stopwords::StopWordFilter;
use crate::tokenizer::split_into_words;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
    /// Words that add to a document's relevance.
    pub plus_words: BTreeSet<String>,
    /// Words that exclude any document containing them.
    pub minus_words: BTreeSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool { self.plus_words.is_empty() && self.minus_words.is_empty() }
}

struct QueryWord<'a> {
    word: &'a str,
    is_minus: bool,
}

fn parse_query_word(token: &str) -> QueryWord<'_> {
    match token.strip_prefix('-') {
        Some(word) => QueryWord { word, is_minus: true },
        None => QueryWord { word: token, is_minus: false },
    }
}

/// Parse a raw query. A leading `-` marks a minus word; only one `-` is stripped.
///
/// Stop words are dropped whether marked or not, and a bare `-` is skipped. A word
/// given both ways is kept as a minus word only.
pub fn parse_query(raw_query: &str, stop_words: &StopWordFilter) -> Query {
    let mut query = Query::default();
    for token in split_into_words(raw_query) {
        let QueryWord { word, is_minus } = parse_query_word(token);
        if word.is_empty() || stop_words.is_stop(word) {
            continue;
        }
        if is_minus {
            query.minus_words.insert(word.to_string());
        } else {
            query.plus_words.insert(word.to_string());
        }
    }
    let minus_words = &query.minus_words;
    query.plus_words.retain(|w| !minus_words.contains(w));
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(text: &str) -> StopWordFilter {
        let mut s = StopWordFilter::new();
        s.configure(text);
        s
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_plus_and_minus() {
        let q = parse_query("пушистый -ошейник кот пушистый", &stop(""));
        assert_eq!(q.plus_words, set(&["кот", "пушистый"]));
        assert_eq!(q.minus_words, set(&["ошейник"]));
    }

    #[test]
    fn stop_words_dropped_even_when_negated() {
        let q = parse_query("кот и -в", &stop("и в на"));
        assert_eq!(q.plus_words, set(&["кот"]));
        assert!(q.minus_words.is_empty());
    }

    #[test]
    fn bare_dash_is_skipped() {
        let q = parse_query("- кот -", &stop(""));
        assert_eq!(q.plus_words, set(&["кот"]));
        assert!(q.minus_words.is_empty());
    }

    #[test]
    fn only_one_dash_is_stripped() {
        let q = parse_query("--кот", &stop(""));
        assert_eq!(q.minus_words, set(&["-кот"]));
    }

    #[test]
    fn minus_wins_over_plus() {
        let q = parse_query("кот -кот пёс", &stop(""));
        assert_eq!(q.plus_words, set(&["пёс"]));
        assert_eq!(q.minus_words, set(&["кот"]));
    }

    #[test]
    fn empty_query() {
        assert!(parse_query("   ", &stop("")).is_empty());
    }
}
