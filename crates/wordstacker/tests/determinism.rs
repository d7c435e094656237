#![allow(missing_docs)]

use proptest::prelude::*;
use wordstacker::{Padding, TokenizerOptions, WordVocab, padding::pad_sequences};

type T = u32;

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-e ]{0,24}", 0..12)
}

proptest! {
    #[test]
    fn fitting_twice_yields_identical_vocabularies(corpus in corpus_strategy()) {
        let options = TokenizerOptions::default();

        let a: WordVocab<T> = options.fit(&corpus).unwrap();
        let b: WordVocab<T> = options.fit(&corpus).unwrap();

        prop_assert_eq!(a, b);
    }

    #[test]
    fn ordinary_indices_are_dense_from_one(corpus in corpus_strategy()) {
        let options = TokenizerOptions::default();
        let vocab: WordVocab<T> = options.fit(&corpus).unwrap();

        let n = vocab.ordinary_len() as u32;
        for index in 1..=n {
            prop_assert!(vocab.word_of(index).is_some());
        }
        prop_assert_eq!(vocab.oov_index(), Some(n + 1));
        prop_assert_eq!(vocab.max_index(), Some(n + 1));
    }

    #[test]
    fn encoding_preserves_token_counts(corpus in corpus_strategy()) {
        let options = TokenizerOptions::default();
        let vocab: WordVocab<T> = options.fit(&corpus).unwrap();

        let sequences = wordstacker::encoding::encode_texts(&vocab, &corpus).unwrap();
        prop_assert_eq!(sequences.len(), corpus.len());
        for (text, sequence) in corpus.iter().zip(&sequences) {
            prop_assert_eq!(text.split_whitespace().count(), sequence.len());
        }
    }

    #[test]
    fn padded_batches_are_rectangular(
        sequences in proptest::collection::vec(
            proptest::collection::vec(0u32..100, 0..16),
            0..8,
        ),
        maxlen in 1usize..16,
    ) {
        let batch = pad_sequences(&sequences, maxlen, Padding::Post, Some(0)).unwrap();
        prop_assert_eq!(batch.shape(), &[sequences.len(), maxlen]);

        for (row, sequence) in sequences.iter().enumerate() {
            let keep = sequence.len().min(maxlen);
            for (col, &index) in sequence[..keep].iter().enumerate() {
                prop_assert_eq!(batch[[row, col]], index);
            }
            for col in keep..maxlen {
                prop_assert_eq!(batch[[row, col]], 0);
            }
        }
    }
}
