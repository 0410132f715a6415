//! Batch orchestration: validate fast, stream wide, join in input order.

use futures_util::future::try_join_all;
use vouch_hash::Algorithm;

use crate::engine::digest_source;
use crate::error::DigestError;
use crate::request::{DigestResult, RequestEntry, validate};
use crate::source::{ByteSource, HttpClient};

#[cfg(feature = "reqwest")]
use crate::defaults;
#[cfg(feature = "reqwest")]
use crate::source::ReqwestClient;

/// Runs the validate -> resolve -> digest pipeline for a batch of entries.
///
/// The client and the default algorithm set are fixed at construction, so an
/// in-flight batch never observes a concurrent update to the process-wide
/// registry.
pub struct Digester<C: HttpClient> {
    client: C,
    defaults: Vec<Algorithm>,
}

#[cfg(feature = "reqwest")]
impl Digester<ReqwestClient> {
    /// Digester with the production HTTP client and a snapshot of the
    /// process-wide default set.
    pub fn new() -> Self {
        Self::with_client(ReqwestClient::new(), defaults::default_algorithms())
    }
}

#[cfg(feature = "reqwest")]
impl Default for Digester<ReqwestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: HttpClient> Digester<C> {
    /// Digester with an explicit client and default set.
    pub fn with_client(client: C, defaults: Vec<Algorithm>) -> Self {
        Self { client, defaults }
    }

    /// Digest every entry concurrently, preserving input order.
    ///
    /// Pre-validation is synchronous and fail-fast: the first malformed entry
    /// aborts the batch before any resource is opened. Once pipelines are
    /// running, the first error fails the batch and the remaining pipelines
    /// are cancelled by drop; no partial result is ever returned.
    pub async fn run(&self, entries: &[RequestEntry]) -> Result<Vec<DigestResult>, DigestError> {
        let requests = validate(entries, &self.defaults)?;
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(resources = requests.len(), "dispatching batch");

        try_join_all(requests.into_iter().map(|request| async move {
            let source = ByteSource::open(&self.client, &request.locator)
                .await
                .map_err(|source| DigestError::Transport {
                    locator: request.locator.clone(),
                    source,
                })?;
            digest_source(request, source).await
        }))
        .await
    }
}

/// Digest a batch with the production client and the process-wide default
/// algorithm set. This is the programmatic one-call surface.
#[cfg(feature = "reqwest")]
pub async fn digest_batch(entries: &[RequestEntry]) -> Result<Vec<DigestResult>, DigestError> {
    Digester::new().run(entries).await
}
