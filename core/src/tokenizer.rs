/// Split text into words on the ASCII space character.
///
/// Runs of spaces never produce empty words. Tabs and newlines are ordinary characters.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}
