//! Domain types and DTOs
//!
//! Typed schemas for the content entities, with required vs optional fields
//! made explicit so malformed content is rejected at load time.

pub mod blog;
pub mod contact;
pub mod explore;
pub mod neighborhoods;
pub mod properties;

// Re-export commonly used types
pub use blog::*;
pub use contact::*;
pub use explore::*;
pub use neighborhoods::*;
pub use properties::*;
