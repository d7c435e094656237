//! # `wordstacker` Text Vectorizer
//!
//! `wordstacker` turns whitespace-tokenized text into fixed-length integer
//! sequences suitable for feeding into a numeric model.
//!
//! The pipeline is three steps, run in order:
//! * fit a frequency-ranked [`vocab::WordVocab`] over a corpus
//!   ([`counting`] + [`vocab`]),
//! * map texts through the vocabulary into integer sequences
//!   ([`encoding`]),
//! * truncate/pad the sequences into a rectangular batch ([`padding`]).
//!
//! [`tokenizer::Tokenizer`] bundles all three behind one stateful facade;
//! each step is also available as a pure function over an explicit
//! [`vocab::WordVocab`] value.
//!
//! ```rust
//! use wordstacker::{Padding, Tokenizer, TokenizerOptions};
//!
//! type T = u32;
//!
//! let mut tokenizer: Tokenizer<T> = TokenizerOptions::default()
//!     .with_num_words(Some(1000))
//!     .build();
//!
//! tokenizer.fit_on_texts(["the cat sat", "the dog sat"])?;
//!
//! let sequences = tokenizer.texts_to_sequences(["the cat"])?;
//! let batch = tokenizer.pad_sequences(&sequences, 4, Padding::Post)?;
//! assert_eq!(batch.shape(), &[1, 4]);
//! # Ok::<(), wordstacker::WordstackerError>(())
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap` implementations for ``ahash``; which is a
//! performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::WsHash{*}`` type alias machinery.
#![warn(missing_docs, unused)]

pub mod counting;
pub mod decoding;
pub mod encoding;
pub mod errors;
pub mod padding;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{WordstackerError, WsResult};
#[doc(inline)]
pub use padding::Padding;
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::IndexType;
#[doc(inline)]
pub use vocab::WordVocab;
