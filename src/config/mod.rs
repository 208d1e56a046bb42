//! Configuration schema for the path filter.
//!
//! # Responsibilities
//! - Define the two ordered pattern lists consumed at construction
//! - Deserialize from whatever format the host loader speaks (serde)
//!
//! # Design Decisions
//! - Both lists are optional in config files; absent == empty
//! - Patterns stay plain strings here; compilation (and therefore validation)
//!   happens in the filter constructor, not during deserialization

use serde::{Deserialize, Serialize};

/// Pattern lists driving the filtering decision.
///
/// Patterns are regular expressions tested against the escaped URL path of
/// each request. A matching allow pattern forwards the request unconditionally;
/// otherwise a matching block pattern rejects it with 403 Forbidden.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockPathConfig {
    /// Patterns that forward the request regardless of block patterns.
    pub allows: Vec<String>,

    /// Patterns that reject the request when no allow pattern matched.
    pub blocks: Vec<String>,
}
