//! # Fitted Word Vocabulary

use crate::errors::{WordstackerError, WsResult};
use crate::types::{IndexType, WsHashMap, hash_map_with_capacity};
use crate::vocab::validators::try_index_capacity;

/// An immutable fitted ``{ word <-> index }`` vocabulary.
///
/// Index 0 is reserved for the padding token when padding is enabled.
/// Ordinary words occupy ``1..=N``, assigned in strictly decreasing
/// corpus frequency, ties resolved to first-encountered order.
/// The out-of-vocabulary token, when enabled, sits at ``N + 1``.
///
/// The two maps are mutually inverse; construction rejects any input
/// that would assign one index to two words.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordVocab<T: IndexType> {
    /// The ``{ word -> index }`` map.
    word_index: WsHashMap<String, T>,

    /// The ``{ index -> word }`` map.
    index_word: WsHashMap<T, String>,

    /// The number of ordinary (non-reserved) words.
    ordinary_len: usize,

    /// The out-of-vocabulary index, if enabled.
    oov_index: Option<T>,

    /// The padding index, if enabled.
    pad_index: Option<T>,
}

impl<T: IndexType> WordVocab<T> {
    /// Build a vocabulary from a ranked word list.
    ///
    /// ## Arguments
    /// * `ranked` - distinct words in descending frequency order,
    ///   ties already resolved to first-encountered order.
    /// * `num_words` - optional cap on ordinary words retained; the
    ///   selection is a strict prefix of `ranked`.
    /// * `oov_token` - optional out-of-vocabulary token.
    /// * `padding_token` - optional padding token.
    ///
    /// ## Returns
    /// A new `WordVocab`; `Configuration` on duplicate or colliding
    /// words, `IndexOverflow` if the highest index does not fit in `T`.
    pub fn from_ranked_words<I, S>(
        ranked: I,
        num_words: Option<usize>,
        oov_token: Option<&str>,
        padding_token: Option<&str>,
    ) -> WsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let (Some(oov), Some(pad)) = (oov_token, padding_token) {
            if oov == pad {
                return Err(WordstackerError::Configuration(format!(
                    "oov_token and padding_token are both {oov:?}"
                )));
            }
        }

        let words: Vec<String> = match num_words {
            Some(cap) => ranked.into_iter().take(cap).map(Into::into).collect(),
            None => ranked.into_iter().map(Into::into).collect(),
        };

        let ordinary_len = words.len();
        let max_index = ordinary_len + usize::from(oov_token.is_some());
        try_index_capacity::<T>(max_index)?;

        let mut word_index: WsHashMap<String, T> =
            hash_map_with_capacity(ordinary_len + 2);

        for (i, word) in words.into_iter().enumerate() {
            let index = T::from_usize(i + 1).unwrap();
            if word_index.insert(word.clone(), index).is_some() {
                return Err(WordstackerError::Configuration(format!(
                    "duplicate word {word:?} in ranked input"
                )));
            }
        }

        for reserved in [oov_token, padding_token].into_iter().flatten() {
            if word_index.contains_key(reserved) {
                return Err(WordstackerError::Configuration(format!(
                    "reserved token {reserved:?} collides with a vocabulary word"
                )));
            }
        }

        let oov_index = oov_token.map(|oov| {
            let index = T::from_usize(ordinary_len + 1).unwrap();
            word_index.insert(oov.to_owned(), index);
            index
        });

        let pad_index = padding_token.map(|pad| {
            let index = T::zero();
            word_index.insert(pad.to_owned(), index);
            index
        });

        let index_word = word_index
            .iter()
            .map(|(word, &index)| (index, word.clone()))
            .collect();

        Ok(Self {
            word_index,
            index_word,
            ordinary_len,
            oov_index,
            pad_index,
        })
    }

    /// The index assigned to a word, if any.
    pub fn index_of(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_index.get(word).copied()
    }

    /// The word assigned to an index, if any.
    pub fn word_of(
        &self,
        index: T,
    ) -> Option<&str> {
        self.index_word.get(&index).map(String::as_str)
    }

    /// Whether the word has an assigned index.
    pub fn contains_word(
        &self,
        word: &str,
    ) -> bool {
        self.word_index.contains_key(word)
    }

    /// The number of ordinary (non-reserved) words.
    pub fn ordinary_len(&self) -> usize {
        self.ordinary_len
    }

    /// The total number of entries, reserved tokens included.
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    /// Whether the vocabulary has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }

    /// The out-of-vocabulary index, if enabled.
    pub fn oov_index(&self) -> Option<T> {
        self.oov_index
    }

    /// The padding index, if enabled.
    pub fn pad_index(&self) -> Option<T> {
        self.pad_index
    }

    /// The highest assigned index.
    pub fn max_index(&self) -> Option<T> {
        self.word_index.values().max().copied()
    }

    /// Get the ``{ word -> index }`` map.
    pub fn word_index(&self) -> &WsHashMap<String, T> {
        &self.word_index
    }

    /// Get the ``{ index -> word }`` map.
    pub fn index_word(&self) -> &WsHashMap<T, String> {
        &self.index_word
    }
}
