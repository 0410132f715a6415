//! Streaming digest engine: one pass over the stream, N accumulators.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use vouch_hash::{Accumulator, Algorithm};

use crate::error::DigestError;
use crate::request::{DigestResult, ResourceRequest};
use crate::source::ByteSource;

/// Feed every chunk of `source` to one accumulator per distinct requested
/// algorithm, then seal the result. A stream error at any point abandons all
/// accumulators and fails this resource.
pub(crate) async fn digest_source(
    request: ResourceRequest,
    mut source: ByteSource,
) -> Result<DigestResult, DigestError> {
    let ResourceRequest {
        algorithms,
        locator,
    } = request;

    // Duplicate names collapse to a single accumulator; the value written
    // under the shared key is identical either way.
    let mut accumulators: Vec<(Algorithm, Box<dyn Accumulator>)> =
        Vec::with_capacity(algorithms.len());
    for algorithm in algorithms {
        if accumulators.iter().all(|(held, _)| *held != algorithm) {
            accumulators.push((algorithm, algorithm.accumulator()));
        }
    }

    let mut bytes_seen = 0u64;
    while let Some(chunk) = source.next_chunk().await {
        let chunk = chunk.map_err(|source| DigestError::Transport {
            locator: locator.clone(),
            source,
        })?;
        bytes_seen += chunk.len() as u64;
        for (_, accumulator) in &mut accumulators {
            accumulator.update(&chunk);
        }
    }

    let digests: BTreeMap<String, String> = accumulators
        .into_iter()
        .map(|(algorithm, accumulator)| {
            let digest = STANDARD.encode(accumulator.finalize());
            (algorithm.name().to_owned(), digest)
        })
        .collect();

    tracing::debug!(locator = %locator, bytes = bytes_seen, "digests sealed");

    Ok(DigestResult { locator, digests })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::source::{BoxStream, HttpClient};
    use bytes::Bytes;

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

    async fn digest_fixture(content: &[u8], algorithms: Vec<Algorithm>) -> DigestResult {
        let mut fixture = tempfile::NamedTempFile::new().unwrap();
        fixture.write_all(content).unwrap();
        let locator = fixture.path().to_str().unwrap().to_owned();

        let source = ByteSource::open(&NoHttp, &locator).await.unwrap();
        digest_source(
            ResourceRequest {
                algorithms,
                locator,
            },
            source,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn sha256_of_hello_matches_known_vector() {
        let result = digest_fixture(b"hello", vec![Algorithm::Sha256]).await;
        assert_eq!(
            result.digests["sha256"],
            "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="
        );
    }

    #[tokio::test]
    async fn duplicate_algorithms_collapse_to_one_key() {
        let result =
            digest_fixture(b"hello", vec![Algorithm::Sha256, Algorithm::Sha256]).await;
        assert_eq!(result.digests.len(), 1);
        assert_eq!(
            result.digests["sha256"],
            "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ="
        );
    }

    #[tokio::test]
    async fn all_requested_algorithms_are_present() {
        let result = digest_fixture(
            b"hello",
            vec![Algorithm::Sha256, Algorithm::Sha512, Algorithm::Blake3],
        )
        .await;
        assert_eq!(result.digests.len(), 3);
        assert!(result.digests.contains_key("sha256"));
        assert!(result.digests.contains_key("sha512"));
        assert!(result.digests.contains_key("blake3"));
    }

    #[tokio::test]
    async fn digesting_twice_is_deterministic() {
        let first = digest_fixture(b"determinism", vec![Algorithm::Sha384]).await;
        let second = digest_fixture(b"determinism", vec![Algorithm::Sha384]).await;
        assert_eq!(first.digests, second.digests);
    }

    #[tokio::test]
    async fn empty_stream_digests_the_empty_string() {
        let result = digest_fixture(b"", vec![Algorithm::Sha256]).await;
        // SHA-256 of zero bytes.
        assert_eq!(
            result.digests["sha256"],
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }
}
