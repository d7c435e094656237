//! # Vocabulary Validators

use crate::errors::{WordstackerError, WsResult};
use crate::types::IndexType;

/// Check that `max_index` is representable by the index type `T`.
///
/// ## Arguments
/// * `max_index` - the highest index the vocabulary will assign.
///
/// ## Returns
/// The converted index on success; `IndexOverflow` otherwise.
pub fn try_index_capacity<T: IndexType>(max_index: usize) -> WsResult<T> {
    T::from_usize(max_index).ok_or(WordstackerError::IndexOverflow { size: max_index })
}
