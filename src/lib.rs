//! Path-filtering middleware for tower/axum.
//!
//! Decides per request, from two ordered regex rule lists, whether to forward
//! the request downstream or reject it with 403 Forbidden. Allow rules
//! override block rules; a request matching neither is forwarded.

pub mod config;
pub mod error;
pub mod filter;

pub use config::BlockPathConfig;
pub use error::{FilterError, PatternError};
pub use filter::{BlockPath, BlockPathLayer};
