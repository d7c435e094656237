//! # Tokenizer Implementation

use ndarray::Array2;

use crate::decoding::decode_sequences;
use crate::encoding::encode_texts;
use crate::errors::{WordstackerError, WsResult};
use crate::padding::{Padding, pad_sequences};
use crate::tokenizer::TokenizerOptions;
use crate::types::IndexType;
use crate::vocab::WordVocab;

/// Whitespace-token text vectorizer.
///
/// Three operations, used in sequence:
/// * [`Tokenizer::fit_on_texts`] builds a frequency-ranked vocabulary,
/// * [`Tokenizer::texts_to_sequences`] maps texts through it,
/// * [`Tokenizer::pad_sequences`] normalizes sequence lengths into a
///   rectangular batch.
///
/// Fitting replaces the vocabulary wholesale; the fitted value is
/// immutable, and the encode/decode/pad operations are pure functions
/// of it and their inputs.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<T: IndexType> {
    /// The config options.
    options: TokenizerOptions,

    /// The fitted vocabulary, if any.
    vocab: Option<WordVocab<T>>,
}

impl<T: IndexType> Tokenizer<T> {
    /// Create an unfitted tokenizer with the given options.
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            vocab: None,
        }
    }

    /// The configured options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Whether a vocabulary has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.vocab.is_some()
    }

    /// The fitted vocabulary.
    ///
    /// ## Returns
    /// `NotFitted` if [`Tokenizer::fit_on_texts`] has not been called.
    pub fn vocab(&self) -> WsResult<&WordVocab<T>> {
        self.vocab.as_ref().ok_or(WordstackerError::NotFitted)
    }

    /// Fit the vocabulary on a training corpus.
    ///
    /// Any previously fitted vocabulary is fully discarded; corpora are
    /// not merged across calls.
    ///
    /// ## Arguments
    /// * `texts` - the training corpus.
    pub fn fit_on_texts<I>(
        &mut self,
        texts: I,
    ) -> WsResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.vocab = Some(self.options.fit(texts)?);
        Ok(())
    }

    /// Encode texts into integer sequences.
    ///
    /// See [`crate::encoding::encode_texts`].
    pub fn texts_to_sequences<I>(
        &self,
        texts: I,
    ) -> WsResult<Vec<Vec<T>>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        encode_texts(self.vocab()?, texts)
    }

    /// Decode integer sequences back into space-joined texts.
    ///
    /// See [`crate::decoding::decode_sequences`].
    pub fn sequences_to_texts<I>(
        &self,
        sequences: I,
    ) -> WsResult<Vec<String>>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        decode_sequences(self.vocab()?, sequences)
    }

    /// Truncate or pad sequences into a rectangular ``(n, maxlen)``
    /// batch, using the fitted padding index as fill.
    ///
    /// See [`crate::padding::pad_sequences`].
    pub fn pad_sequences<I>(
        &self,
        sequences: I,
        maxlen: usize,
        padding: Padding,
    ) -> WsResult<Array2<T>>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        pad_sequences(sequences, maxlen, padding, self.vocab()?.pad_index())
    }
}
