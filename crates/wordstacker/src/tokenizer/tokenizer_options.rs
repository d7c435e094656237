//! # Tokenizer Options

use crate::counting::WordCounter;
use crate::errors::WsResult;
use crate::tokenizer::Tokenizer;
use crate::types::IndexType;
use crate::vocab::WordVocab;

/// Default out-of-vocabulary token.
pub const DEFAULT_OOV_TOKEN: &str = "<OOV>";

/// Default padding token.
pub const DEFAULT_PADDING_TOKEN: &str = "<PAD>";

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Cap on ordinary words retained by fitting; `None` keeps all.
    pub num_words: Option<usize>,

    /// Out-of-vocabulary token; `None` disables OOV handling,
    /// making unseen tokens an encode error.
    pub oov_token: Option<String>,

    /// Padding token; `None` disables padding and the index-0
    /// reservation.
    pub padding_token: Option<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            num_words: None,
            oov_token: Some(DEFAULT_OOV_TOKEN.to_owned()),
            padding_token: Some(DEFAULT_PADDING_TOKEN.to_owned()),
        }
    }
}

impl TokenizerOptions {
    /// Sets the ordinary-word cap.
    pub fn set_num_words(
        &mut self,
        num_words: Option<usize>,
    ) {
        self.num_words = num_words;
    }

    /// Sets the ordinary-word cap.
    pub fn with_num_words(
        mut self,
        num_words: Option<usize>,
    ) -> Self {
        self.set_num_words(num_words);
        self
    }

    /// Sets the out-of-vocabulary token; `None` disables OOV handling.
    pub fn set_oov_token<S: Into<String>>(
        &mut self,
        oov_token: Option<S>,
    ) {
        self.oov_token = oov_token.map(Into::into);
    }

    /// Sets the out-of-vocabulary token; `None` disables OOV handling.
    pub fn with_oov_token<S: Into<String>>(
        mut self,
        oov_token: Option<S>,
    ) -> Self {
        self.set_oov_token(oov_token);
        self
    }

    /// Sets the padding token; `None` disables padding.
    pub fn set_padding_token<S: Into<String>>(
        &mut self,
        padding_token: Option<S>,
    ) {
        self.padding_token = padding_token.map(Into::into);
    }

    /// Sets the padding token; `None` disables padding.
    pub fn with_padding_token<S: Into<String>>(
        mut self,
        padding_token: Option<S>,
    ) -> Self {
        self.set_padding_token(padding_token);
        self
    }

    /// Fit a vocabulary over the given corpus.
    ///
    /// Tokens are counted across all texts (whitespace-run splitting),
    /// ranked by descending frequency with first-seen tie-breaking, and
    /// the top `num_words` become the ordinary vocabulary. The OOV and
    /// padding tokens, when enabled, take the next index and index 0.
    ///
    /// ## Arguments
    /// * `texts` - the training corpus.
    ///
    /// ## Returns
    /// The fitted vocabulary as an immutable value.
    pub fn fit<T, I>(
        &self,
        texts: I,
    ) -> WsResult<WordVocab<T>>
    where
        T: IndexType,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counter: WordCounter<u64> = WordCounter::default();
        counter.update_from_samples(texts);
        log::debug!("counted {} distinct words", counter.distinct_words());

        let ranked = counter.into_ranked().into_iter().map(|(word, _)| word);
        let vocab = WordVocab::from_ranked_words(
            ranked,
            self.num_words,
            self.oov_token.as_deref(),
            self.padding_token.as_deref(),
        )?;

        log::info!(
            "fitted vocabulary: {} ordinary words, {} entries total",
            vocab.ordinary_len(),
            vocab.len(),
        );
        Ok(vocab)
    }

    /// Build an unfitted [`Tokenizer`] from these options.
    pub fn build<T: IndexType>(self) -> Tokenizer<T> {
        Tokenizer::new(self)
    }
}
