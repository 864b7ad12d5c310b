// ============================================================================
// mixed-collection - An Ordered Associative Collection for Rust
// ============================================================================
//
// One container for list-like and map-like data: integer positions and
// string names share a single ordered key space.
// ============================================================================

//! An ordered associative collection.
//!
//! [`Collection`] stores values under [`Key`]s that are either integers or
//! strings, in insertion order. Values appended without a key get the next
//! integer key; removing never renumbers; `map`, `filter` and `slice` return
//! fresh collections that keep the original keys.
//!
//! ```
//! use mixed_collection::Collection;
//!
//! let words = Collection::from_entries([("foo", "bar"), ("bar", "baz")]);
//! let plural = words.map(|v| format!("{}s", v)).filter(|v| v == "bars");
//!
//! assert_eq!(plural.count(), 1);
//! assert_eq!(plural.get("foo").map(String::as_str), Some("bars"));
//! assert_eq!(words.count(), 2);
//! ```

pub mod collections;
pub mod core;
pub mod equality;

#[cfg(feature = "serde")]
mod serde_impls;

// Re-export the public surface at crate root
pub use collections::Collection;
pub use crate::core::error::CollectionError;
pub use crate::core::key::Key;
pub use equality::{Comparison, LooseEq};

// =============================================================================
// TESTS
// =============================================================================
