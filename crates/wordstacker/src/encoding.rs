//! # Sequence Encoding

use crate::errors::{WordstackerError, WsResult};
use crate::types::IndexType;
use crate::vocab::WordVocab;

/// Encode one text into an integer sequence.
///
/// The text is split on whitespace runs; each token is looked up in the
/// vocabulary. Tokens with no entry map to the out-of-vocabulary index;
/// when no such index is configured the encode fails with
/// `UnknownToken`.
///
/// ## Arguments
/// * `vocab` - the fitted vocabulary.
/// * `text` - the text to encode.
///
/// ## Returns
/// One index per token, in token order.
pub fn encode_text<T: IndexType>(
    vocab: &WordVocab<T>,
    text: &str,
) -> WsResult<Vec<T>> {
    text.split_whitespace()
        .map(|word| match vocab.index_of(word) {
            Some(index) => Ok(index),
            None => vocab
                .oov_index()
                .ok_or_else(|| WordstackerError::UnknownToken {
                    word: word.to_owned(),
                }),
        })
        .collect()
}

/// Encode texts into integer sequences.
///
/// ## Arguments
/// * `vocab` - the fitted vocabulary.
/// * `texts` - the texts to encode.
///
/// ## Returns
/// One sequence per input text, preserving input order; no partial
/// output is returned on error.
pub fn encode_texts<T, I>(
    vocab: &WordVocab<T>,
    texts: I,
) -> WsResult<Vec<Vec<T>>>
where
    T: IndexType,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| encode_text(vocab, text.as_ref()))
        .collect()
}
