//! # Error Types

/// Errors from wordstacker operations.
#[derive(Debug, thiserror::Error)]
pub enum WordstackerError {
    /// Encode, decode, or pad was called before a vocabulary was fitted.
    #[error("no fitted vocabulary; call fit_on_texts first")]
    NotFitted,

    /// Conflicting or missing configuration.
    #[error("configuration conflict: {0}")]
    Configuration(String),

    /// Malformed call arguments.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A token with no vocabulary entry, met with out-of-vocabulary
    /// handling disabled.
    #[error("unknown token {word:?}, and no out-of-vocabulary index is configured")]
    UnknownToken {
        /// The token that had no entry.
        word: String,
    },

    /// An index with no vocabulary entry.
    #[error("unknown index ({index})")]
    UnknownIndex {
        /// The index that had no entry.
        index: u64,
    },

    /// Vocab size exceeds the capacity of the target index type.
    #[error("vocab size ({size}) exceeds index type capacity")]
    IndexOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },
}

/// Result type for wordstacker operations.
pub type WsResult<T> = core::result::Result<T, WordstackerError>;
