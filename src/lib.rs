//! storynorm - normalize issue-tracker user-story descriptions.
//!
//! Strips "Acceptance Criteria" and "Success Metrics" sections from
//! wiki-markup issue descriptions and shapes the remainder into a one-line
//! user story followed by an `h2. Description` body. The transformation is
//! pure, total over its input domain, and idempotent.

pub mod error;
pub mod normalize;
pub mod shape;
pub mod strip;

pub use error::{NormError, Result};
pub use normalize::process;

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
