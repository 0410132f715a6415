//! Byte sources over heterogeneous transports.
//!
//! A locator is either a plain filesystem path or an `http://`/`https://`
//! URL. Both resolve to a [`ByteSource`], the single streaming interface the
//! digest engine consumes.

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::TransportError;

/// A boxed stream of body chunks.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Read size for local files.
const CHUNK_SIZE: usize = 64 * 1024;

/// Asynchronous HTTP client abstraction.
///
/// The minimal interface the resolver needs. Implementations handle their own
/// redirect following, timeouts, and TLS configuration; the engine only ever
/// sees the body stream. Status codes are not inspected here: the bytes of an
/// error body get digested like any other body.
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Open a streaming GET and return the response body as a stream.
    fn stream(
        &self,
        url: &str,
    ) -> impl Future<
        Output = Result<BoxStream<'static, Result<Bytes, Self::Error>>, Self::Error>,
    > + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client backed by `reqwest` with platform-default TLS.
    #[derive(Debug, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn stream(
            &self,
            url: &str,
        ) -> Result<BoxStream<'static, Result<Bytes, Self::Error>>, Self::Error> {
            let response = self.client.get(url).send().await?;
            Ok(Box::pin(response.bytes_stream()))
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

/// A live byte-producing stream behind one interface, selected by locator
/// prefix.
pub enum ByteSource {
    Local { file: File },
    Remote { stream: BoxStream<'static, Result<Bytes, TransportError>> },
}

impl std::fmt::Debug for ByteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteSource::Local { .. } => f.debug_struct("Local").finish_non_exhaustive(),
            ByteSource::Remote { .. } => f.debug_struct("Remote").finish_non_exhaustive(),
        }
    }
}

impl ByteSource {
    /// Open `locator`: `http://` and `https://` go through the client,
    /// anything else is opened as a local path.
    pub async fn open<C: HttpClient>(client: &C, locator: &str) -> Result<Self, TransportError> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            tracing::debug!(url = %locator, "opening remote resource");
            let stream = client
                .stream(locator)
                .await
                .map_err(|e| TransportError::Network(Box::new(e)))?;
            let stream = stream.map(|chunk| chunk.map_err(|e| TransportError::Network(Box::new(e))));
            Ok(ByteSource::Remote {
                stream: Box::pin(stream),
            })
        } else {
            tracing::debug!(path = %locator, "opening local resource");
            let file = File::open(locator).await?;
            Ok(ByteSource::Local { file })
        }
    }

    /// Next chunk of the body, or `None` at end of stream.
    pub async fn next_chunk(&mut self) -> Option<Result<Bytes, TransportError>> {
        match self {
            ByteSource::Local { file } => {
                let mut buf = vec![0u8; CHUNK_SIZE];
                match file.read(&mut buf).await {
                    Ok(0) => None,
                    Ok(n) => {
                        buf.truncate(n);
                        Some(Ok(Bytes::from(buf)))
                    }
                    Err(e) => Some(Err(TransportError::Io(e))),
                }
            }
            ByteSource::Remote { stream } => stream.next().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct NoHttp;

    impl HttpClient for NoHttp {
        type Error = std::io::Error;

        async fn stream(
            &self,
            _url: &str,
        ) -> Result<BoxStream<'static, Result<Bytes, Self::Error>>, Self::Error> {
            Err(std::io::Error::other("no network in tests"))
        }
    }

    #[tokio::test]
    async fn local_path_streams_file_bytes() {
        let mut fixture = tempfile::NamedTempFile::new().unwrap();
        fixture.write_all(b"hello").unwrap();

        let mut source = ByteSource::open(&NoHttp, fixture.path().to_str().unwrap())
            .await
            .unwrap();

        let chunk = source.next_chunk().await.unwrap().unwrap();
        assert_eq!(&chunk[..], b"hello");
        assert!(source.next_chunk().await.is_none());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = ByteSource::open(&NoHttp, "/definitely/not/here")
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Io(_)));
    }

    #[tokio::test]
    async fn url_prefix_dispatches_to_client() {
        let err = ByteSource::open(&NoHttp, "http://localhost:1/x")
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
