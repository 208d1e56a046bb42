//! Error types for filter construction.
//!
//! All errors surface at construction time. The per-request decision has no
//! error path: a request is either forwarded or rejected with 403.

use thiserror::Error;

/// A configured pattern is not a valid regular expression.
#[derive(Debug, Error)]
#[error("error compiling regex {pattern:?}")]
pub struct PatternError {
    /// The offending pattern text, exactly as configured.
    pub pattern: String,

    /// The underlying syntax diagnostic.
    #[source]
    pub source: regex::Error,
}

/// Errors that can occur while building a path filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The allow list failed to compile.
    #[error("failed to prepare allow patterns")]
    AllowList(#[source] PatternError),

    /// The block list failed to compile.
    #[error("failed to prepare block patterns")]
    BlockList(#[source] PatternError),
}
