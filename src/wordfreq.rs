//! Case-insensitive word frequency counting

use indexmap::IndexMap;

/// Count every word, lowercased. Entries keep the order in which each word
/// was first seen.
pub fn count_word_frequency<I, S>(words: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut frequencies = IndexMap::new();
    for word in words {
        *frequencies.entry(word.as_ref().to_lowercase()).or_insert(0) += 1;
    }
    frequencies
}

/// Words seen more than once, most frequent first. Ties keep first-seen order.
pub fn repeated_words(frequencies: &IndexMap<String, usize>) -> Vec<(&str, usize)> {
    let mut repeated: Vec<(&str, usize)> = frequencies
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(word, count)| (word.as_str(), *count))
        .collect();
    repeated.sort_by(|a, b| b.1.cmp(&a.1));
    repeated
}

/// One `word: count` line per repeated word
pub fn display_repeated_words(frequencies: &IndexMap<String, usize>) -> String {
    repeated_words(frequencies)
        .into_iter()
        .map(|(word, count)| format!("{}: {}", word, count))
        .collect::<Vec<_>>()
        .join("\n")
}
