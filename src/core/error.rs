// ============================================================================
// mixed-collection - Errors
// ============================================================================
//
// Absence is never an error in this crate: lookups and removals return
// Option. These variants only cover conversions at the edges.

use thiserror::Error;

/// Errors from fallible conversions into keys or collections.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An unsigned integer that does not fit the signed key space.
    #[error("index {index} does not fit in an i64 key")]
    IndexOutOfRange {
        /// The rejected value
        index: u64,
    },

    /// A value that is neither a list nor a map was offered as a collection.
    #[error("expected an array or object, found {found}")]
    NotAContainer {
        /// Kind of value that was found instead
        found: &'static str,
    },
}

impl CollectionError {
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, CollectionError::IndexOutOfRange { .. })
    }

    pub fn is_not_a_container(&self) -> bool {
        matches!(self, CollectionError::NotAContainer { .. })
    }
}
