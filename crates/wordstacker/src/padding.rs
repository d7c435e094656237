//! # Length Normalization

use ndarray::Array2;
use strum::{Display, EnumString};

use crate::errors::{WordstackerError, WsResult};
use crate::types::IndexType;

/// Which side of a short sequence receives padding.
///
/// Truncation of over-long sequences always drops the tail,
/// independent of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Padding {
    /// Fill at the start of the sequence.
    Pre,

    /// Fill at the end of the sequence.
    #[default]
    Post,
}

impl Padding {
    /// Parse a padding side name.
    ///
    /// ## Arguments
    /// * `name` - exactly `"pre"` or `"post"`.
    ///
    /// ## Returns
    /// The padding side; `InvalidArgument` for any other string.
    pub fn parse(name: &str) -> WsResult<Self> {
        name.parse().map_err(|_| {
            WordstackerError::InvalidArgument(format!(
                "padding must be \"pre\" or \"post\", got {name:?}"
            ))
        })
    }
}

/// Truncate or pad sequences into a rectangular ``(n, maxlen)`` batch.
///
/// Sequences longer than `maxlen` keep their first `maxlen` elements.
/// Shorter ones are filled with `pad_index` on the side selected by
/// `padding`; equal-length ones pass through unchanged.
///
/// ## Arguments
/// * `sequences` - the sequences to normalize.
/// * `maxlen` - the target length; must be positive.
/// * `padding` - the side that receives padding.
/// * `pad_index` - the fill index; required only if some sequence is
///   shorter than `maxlen`.
///
/// ## Returns
/// An `Array2` of shape ``(sequence count, maxlen)``; `InvalidArgument`
/// for a zero `maxlen`, `Configuration` if padding is needed and
/// `pad_index` is `None`.
pub fn pad_sequences<T, I>(
    sequences: I,
    maxlen: usize,
    padding: Padding,
    pad_index: Option<T>,
) -> WsResult<Array2<T>>
where
    T: IndexType,
    I: IntoIterator,
    I::Item: AsRef<[T]>,
{
    if maxlen == 0 {
        return Err(WordstackerError::InvalidArgument(
            "maxlen must be a positive integer".to_owned(),
        ));
    }

    let sequences: Vec<I::Item> = sequences.into_iter().collect();
    let mut batch = Array2::zeros((sequences.len(), maxlen));

    for (row, sequence) in sequences.iter().enumerate() {
        let sequence = sequence.as_ref();

        if sequence.len() >= maxlen {
            for (col, &index) in sequence[..maxlen].iter().enumerate() {
                batch[[row, col]] = index;
            }
            continue;
        }

        let pad = pad_index.ok_or_else(|| {
            WordstackerError::Configuration(
                "padding required, but no padding token was configured".to_owned(),
            )
        })?;

        let offset = match padding {
            Padding::Post => 0,
            Padding::Pre => maxlen - sequence.len(),
        };

        for col in 0..offset {
            batch[[row, col]] = pad;
        }
        for (col, &index) in sequence.iter().enumerate() {
            batch[[row, offset + col]] = index;
        }
        for col in (offset + sequence.len())..maxlen {
            batch[[row, col]] = pad;
        }
    }

    Ok(batch)
}
