//! Request filtering subsystem.
//!
//! # Data Flow
//! ```text
//! configuration (pattern lists)
//!     → pattern.rs (compile once, fail-fast)
//!     → layer.rs (per-request decision: allow scan → block scan → default allow)
//!     → forward to inner service, or 403 Forbidden
//! ```

pub mod layer;
pub mod pattern;

pub use layer::{BlockPath, BlockPathLayer};
