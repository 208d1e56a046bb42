//! The path filter as a tower `Layer` + `Service`.
//!
//! # Responsibilities
//! - Compile both pattern lists into immutable rule sets at construction
//! - Per request: forward to the inner service or reject with 403 Forbidden
//!
//! # Design Decisions
//! - Rule sets live behind an `Arc` so layering and cloning never recompile
//! - Matching runs against the escaped path (`Uri::path` keeps the
//!   percent-encoded wire form); no decoding or canonicalization
//! - Allow rules short-circuit and override block rules
//! - Rejections carry the status code only: default (empty) body, no headers

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, Response, StatusCode};
use futures_util::future::{ready, Either, Ready};
use regex::Regex;
use tower::{Layer, Service};

use crate::config::BlockPathConfig;
use crate::error::FilterError;
use crate::filter::pattern;

/// Compiled allow and block matchers, shared read-only across requests.
#[derive(Debug)]
struct RuleSets {
    allows: Vec<Regex>,
    blocks: Vec<Regex>,
}

impl RuleSets {
    fn from_config(config: &BlockPathConfig) -> Result<Self, FilterError> {
        let allows = pattern::compile(&config.allows).map_err(FilterError::AllowList)?;
        let blocks = pattern::compile(&config.blocks).map_err(FilterError::BlockList)?;
        Ok(Self { allows, blocks })
    }
}

/// Layer that installs a [`BlockPath`] filter in front of a service.
///
/// Compiles the pattern lists once; every service produced by
/// [`Layer::layer`] shares the same compiled rules.
///
/// ```
/// use axum::{routing::get, Router};
/// use blockpath::{BlockPathConfig, BlockPathLayer};
///
/// let config = BlockPathConfig {
///     blocks: vec![r"^/internal(/.*)?$".into()],
///     ..Default::default()
/// };
/// let app: Router = Router::new()
///     .route("/", get(|| async { "ok" }))
///     .layer(BlockPathLayer::new(&config, "edge")?);
/// # Ok::<(), blockpath::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BlockPathLayer {
    rules: Arc<RuleSets>,
    name: Arc<str>,
}

impl BlockPathLayer {
    /// Compile the configured patterns into a reusable layer.
    ///
    /// The name is opaque and only shows up in log fields. Fails if either
    /// list contains an invalid pattern; no partially built layer is returned.
    pub fn new(config: &BlockPathConfig, name: impl Into<String>) -> Result<Self, FilterError> {
        Ok(Self {
            rules: Arc::new(RuleSets::from_config(config)?),
            name: name.into().into(),
        })
    }
}

impl<S> Layer<S> for BlockPathLayer {
    type Service = BlockPath<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BlockPath {
            inner,
            rules: self.rules.clone(),
            name: self.name.clone(),
        }
    }
}

/// Middleware that forwards or rejects requests by their escaped URL path.
///
/// Decision per request: any allow match forwards, otherwise any block match
/// rejects with 403, otherwise forwards (default allow). The rule sets are
/// immutable after construction, so concurrent requests need no coordination.
#[derive(Debug, Clone)]
pub struct BlockPath<S> {
    inner: S,
    rules: Arc<RuleSets>,
    name: Arc<str>,
}

impl<S> BlockPath<S> {
    /// Build a filter directly around a downstream service.
    ///
    /// Equivalent to `BlockPathLayer::new(config, name)?.layer(inner)` for
    /// hosts that wire services by hand.
    pub fn new(
        inner: S,
        config: &BlockPathConfig,
        name: impl Into<String>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            inner,
            rules: Arc::new(RuleSets::from_config(config)?),
            name: name.into().into(),
        })
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for BlockPath<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Either<S::Future, Ready<Result<Response<ResBody>, S::Error>>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // Uri::path is the path as received on the wire, percent-encoding
        // intact. Patterns match the escaped form.
        let path = req.uri().path();

        if self.rules.allows.iter().any(|re| re.is_match(path)) {
            tracing::trace!(
                filter = %self.name,
                path = %path,
                "allow rule matched, forwarding"
            );
            return Either::Left(self.inner.call(req));
        }

        if self.rules.blocks.iter().any(|re| re.is_match(path)) {
            tracing::debug!(
                filter = %self.name,
                path = %path,
                "block rule matched, rejecting"
            );
            let mut response = Response::new(ResBody::default());
            *response.status_mut() = StatusCode::FORBIDDEN;
            return Either::Right(ready(Ok(response)));
        }

        Either::Left(self.inner.call(req))
    }
}
