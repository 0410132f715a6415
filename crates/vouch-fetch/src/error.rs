//! Error types for vouch-fetch.

use std::io;

use thiserror::Error;

/// A request entry was rejected during pre-validation, before any I/O.
///
/// Indices are 1-based, matching the position the caller submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The entry's shape is malformed or its locator is empty.
    #[error("invalid resource at entry {index}")]
    InvalidResource { index: usize },

    /// An algorithm name is not in the registry, or none were requested.
    #[error("unavailable hash at entry {index}: {}", .hash.as_deref().unwrap_or("(none requested)"))]
    InvalidHash { index: usize, hash: Option<String> },
}

/// Resolving or reading a resource's byte stream failed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Top-level failure of a digest batch.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("failed to read `{locator}`: {source}")]
    Transport {
        locator: String,
        #[source]
        source: TransportError,
    },
}
