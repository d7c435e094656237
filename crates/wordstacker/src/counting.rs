//! # Corpus Word Counter

use crate::types::{CountType, WsHashMap, hash_map_with_capacity};

/// Expected number of distinct words in a typical corpus.
/// Used when pre-allocating the tally table.
pub const EXPECTED_DISTINCT_WORDS: usize = 4096;

/// Frequency tally for one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordTally<C: CountType> {
    /// Occurrences seen so far.
    count: C,

    /// Arrival rank of the first occurrence.
    first_seen: usize,
}

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Expected number of distinct words.
    /// Used when pre-allocating the tally table.
    pub expected_words: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            expected_words: EXPECTED_DISTINCT_WORDS,
        }
    }
}

impl WordCounterOptions {
    /// Set the expected number of distinct words.
    /// Used when pre-allocating the tally table.
    pub fn with_expected_words(
        self,
        expected_words: usize,
    ) -> Self {
        Self { expected_words }
    }
}

/// Word frequency counter.
///
/// Words are produced by splitting sample texts on whitespace runs.
/// The counter tracks the arrival rank of each word's first occurrence,
/// so that equal-frequency words can be ranked in a stable,
/// reproducible order.
#[derive(Debug, Clone)]
pub struct WordCounter<C: CountType> {
    /// The config options.
    pub options: WordCounterOptions,

    /// The per-word tallies.
    tallies: WsHashMap<String, WordTally<C>>,
}

impl<C: CountType> Default for WordCounter<C> {
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl<C: CountType> WordCounter<C> {
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let tallies = hash_map_with_capacity(options.expected_words);
        Self { options, tallies }
    }

    /// The number of distinct words seen.
    pub fn distinct_words(&self) -> usize {
        self.tallies.len()
    }

    /// The count recorded for a word; zero if unseen.
    pub fn count_of(
        &self,
        word: &str,
    ) -> C {
        self.tallies.get(word).map(|t| t.count).unwrap_or_default()
    }

    /// Update tallies inplace from one text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for word in text.as_ref().split_whitespace() {
            let arrival = self.tallies.len();
            self.tallies
                .entry(word.to_owned())
                .and_modify(|t| t.count = t.count + C::one())
                .or_insert(WordTally {
                    count: C::one(),
                    first_seen: arrival,
                });
        }
    }

    /// Update tallies inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Release the tallies as a ranked ``(word, count)`` list.
    ///
    /// ## Returns
    /// Words in descending count order; equal counts resolve to
    /// first-seen order.
    pub fn into_ranked(self) -> Vec<(String, C)> {
        let mut entries: Vec<(String, WordTally<C>)> = self.tallies.into_iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });
        entries.into_iter().map(|(w, t)| (w, t.count)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counter() {
        type C = u64;

        let mut wc: WordCounter<C> = WordCounter::default();

        let samples = vec!["Hello world", "Foo world bar world"];
        wc.update_from_samples(samples.iter());

        assert_eq!(wc.distinct_words(), 4);
        assert_eq!(wc.count_of("world"), 3);
        assert_eq!(wc.count_of("missing"), 0);

        assert_eq!(
            wc.into_ranked(),
            vec![
                ("world".to_owned(), 3),
                ("Hello".to_owned(), 1),
                ("Foo".to_owned(), 1),
                ("bar".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn test_tie_break_is_first_seen() {
        type C = u32;

        let mut wc: WordCounter<C> = WordCounter::new(
            WordCounterOptions::default().with_expected_words(16),
        );

        // "b" and "a" tie on count; "b" arrived first.
        wc.update_from_text("b a b a c");

        assert_eq!(
            wc.into_ranked(),
            vec![
                ("b".to_owned(), 2),
                ("a".to_owned(), 2),
                ("c".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn test_whitespace_runs() {
        type C = u64;

        let mut wc: WordCounter<C> = WordCounter::default();
        wc.update_from_text("  a \t b\n\n a ");

        assert_eq!(wc.distinct_words(), 2);
        assert_eq!(wc.count_of("a"), 2);
        assert_eq!(wc.count_of("b"), 1);
    }
}
