// ============================================================================
// mixed-collection - Core Types
// ============================================================================

pub mod error;
pub mod key;
