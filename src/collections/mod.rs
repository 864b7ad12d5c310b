// ============================================================================
// mixed-collection - Collections
// ============================================================================
//
// One ordered store serving both list-like and map-like access:
//
// 1. Integer keys: allocated by appends, never renumbered
// 2. String keys: set explicitly, canonical integer strings fold to integers
// 3. Transformations: always return a fresh collection, keys preserved
// ============================================================================

mod collection;
mod trait_impls;

pub use collection::Collection;
