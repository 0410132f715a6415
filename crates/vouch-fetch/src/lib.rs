//! Streaming multi-digest computation over local files and HTTP(S) bodies.
//!
//! # Architecture
//!
//! - [`request`](RequestEntry) - raw entries decoded once at the boundary into
//!   canonical, validated requests
//! - [`source`](ByteSource) - one streaming interface over heterogeneous
//!   transports, selected by locator prefix
//! - [`engine`](DigestResult) - feeds each chunk to every requested
//!   accumulator in a single pass
//! - [`batch`](Digester) - fail-fast pre-validation, concurrent pipelines,
//!   input-order join
//!
//! # Key Features
//!
//! - **Single-Pass**: every byte is read once and fanned out to N hash
//!   accumulators, never buffered whole
//! - **Uniform Transports**: plain paths, `http://` and `https://` locators
//!   behind one [`ByteSource`]
//! - **Fail-Fast Batches**: malformed entries abort before any I/O starts;
//!   the first pipeline error fails the whole batch
//!
//! # Example
//!
//! ```no_run
//! use vouch_fetch::{digest_batch, RequestEntry};
//!
//! # async fn run() -> Result<(), vouch_fetch::DigestError> {
//! let results = digest_batch(&[
//!     RequestEntry::bare("Cargo.toml"),
//!     RequestEntry::with_algorithm("sha512", "https://example.com/release.tar.gz"),
//! ])
//! .await?;
//! assert_eq!(results.len(), 2);
//! # Ok(())
//! # }
//! ```

pub use vouch_hash::{Accumulator, Algorithm};

pub use self::batch::Digester;
pub use self::defaults::{default_algorithms, set_default_algorithms};
pub use self::error::{DigestError, RequestError, TransportError};
pub use self::request::{DigestResult, RequestEntry, ResourceRequest};
pub use self::source::{BoxStream, ByteSource, HttpClient};

#[cfg(feature = "reqwest")]
pub use self::batch::digest_batch;
#[cfg(feature = "reqwest")]
pub use self::source::ReqwestClient;

mod batch;
mod defaults;
mod engine;
mod error;
mod request;
mod source;
