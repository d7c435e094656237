//! # Sequence Decoding

use crate::errors::{WordstackerError, WsResult};
use crate::types::IndexType;
use crate::vocab::WordVocab;

/// Decode one integer sequence back into a space-joined text.
///
/// ## Arguments
/// * `vocab` - the fitted vocabulary.
/// * `sequence` - the indices to decode.
///
/// ## Returns
/// The words for the indices, joined with single spaces; `UnknownIndex`
/// if any index has no vocabulary entry.
pub fn decode_sequence<T: IndexType>(
    vocab: &WordVocab<T>,
    sequence: &[T],
) -> WsResult<String> {
    let mut words = Vec::with_capacity(sequence.len());
    for &index in sequence {
        let word = vocab
            .word_of(index)
            .ok_or_else(|| WordstackerError::UnknownIndex {
                index: index.to_u64().unwrap_or(u64::MAX),
            })?;
        words.push(word);
    }
    Ok(words.join(" "))
}

/// Decode integer sequences back into space-joined texts.
///
/// ## Arguments
/// * `vocab` - the fitted vocabulary.
/// * `sequences` - the sequences to decode.
///
/// ## Returns
/// One text per input sequence, preserving input order.
pub fn decode_sequences<T, I>(
    vocab: &WordVocab<T>,
    sequences: I,
) -> WsResult<Vec<String>>
where
    T: IndexType,
    I: IntoIterator,
    I::Item: AsRef<[T]>,
{
    sequences
        .into_iter()
        .map(|sequence| decode_sequence(vocab, sequence.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_round_trip() {
        type T = u32;

        let vocab: WordVocab<T> = WordVocab::from_ranked_words(
            ["the", "cat", "sat"],
            None,
            Some("<OOV>"),
            Some("<PAD>"),
        )
        .unwrap();

        assert_eq!(
            decode_sequences(&vocab, [vec![1, 2, 3], vec![0, 4]]).unwrap(),
            vec!["the cat sat".to_owned(), "<PAD> <OOV>".to_owned()],
        );

        assert_eq!(decode_sequence(&vocab, &[]).unwrap(), "");
    }

    #[test]
    fn test_decode_unknown_index() {
        type T = u32;

        let vocab: WordVocab<T> =
            WordVocab::from_ranked_words(["a"], None, None, None).unwrap();

        assert!(matches!(
            decode_sequence(&vocab, &[1, 9]),
            Err(WordstackerError::UnknownIndex { index: 9 })
        ));
    }
}
