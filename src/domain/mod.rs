//! Domain value objects and types.
//!
//! Type-safe wrappers that are validated at construction time, so configuration
//! such as recipient addresses cannot hold malformed values.

pub mod email;
pub mod errors;

pub use email::EmailAddress;
pub use errors::ValidationError;
