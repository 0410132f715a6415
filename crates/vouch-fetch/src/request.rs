//! Request shapes and pre-validation.
//!
//! Raw entries are decoded into [`ResourceRequest`] exactly once, at the batch
//! boundary. Everything downstream operates on the canonical form and never
//! re-inspects shape.

use std::collections::BTreeMap;

use serde::Serialize;
use vouch_hash::Algorithm;

use crate::error::RequestError;

/// One raw request entry, as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEntry {
    /// A locator digested with the default algorithm set.
    Bare(String),
    /// A locator paired with its own algorithm name list.
    WithAlgorithms(Vec<String>, String),
}

impl RequestEntry {
    /// Entry that uses the default algorithm set.
    pub fn bare(locator: impl Into<String>) -> Self {
        RequestEntry::Bare(locator.into())
    }

    /// Entry with a single algorithm name, lifted to a one-element list.
    pub fn with_algorithm(name: impl Into<String>, locator: impl Into<String>) -> Self {
        RequestEntry::WithAlgorithms(vec![name.into()], locator.into())
    }

    /// Entry with an explicit algorithm name list.
    pub fn with_algorithms<I, S>(names: I, locator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RequestEntry::WithAlgorithms(names.into_iter().map(Into::into).collect(), locator.into())
    }
}

impl From<&str> for RequestEntry {
    fn from(locator: &str) -> Self {
        RequestEntry::bare(locator)
    }
}

/// Canonical, validated form of one entry. Algorithm names are resolved here;
/// the digest engine can no longer fail on them.
#[derive(Debug, Clone)]
pub struct ResourceRequest {
    pub algorithms: Vec<Algorithm>,
    pub locator: String,
}

/// Digests of a single resource, keyed by algorithm name, each encoded as
/// standard padded base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestResult {
    pub locator: String,
    pub digests: BTreeMap<String, String>,
}

/// Validate every entry in order, fail-fast on the first bad one.
///
/// Pure function of the entries and the default set handed in; performs no
/// I/O. Reported indices are 1-based.
pub(crate) fn validate(
    entries: &[RequestEntry],
    defaults: &[Algorithm],
) -> Result<Vec<ResourceRequest>, RequestError> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| validate_entry(position + 1, entry, defaults))
        .collect()
}

fn validate_entry(
    index: usize,
    entry: &RequestEntry,
    defaults: &[Algorithm],
) -> Result<ResourceRequest, RequestError> {
    let (names, locator) = match entry {
        RequestEntry::Bare(locator) => (None, locator),
        RequestEntry::WithAlgorithms(names, locator) => (Some(names), locator),
    };

    if locator.is_empty() {
        return Err(RequestError::InvalidResource { index });
    }

    let algorithms = match names {
        None => defaults.to_vec(),
        Some(names) => names
            .iter()
            .map(|name| {
                Algorithm::from_name(name).ok_or_else(|| RequestError::InvalidHash {
                    index,
                    hash: Some(name.clone()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    if algorithms.is_empty() {
        return Err(RequestError::InvalidHash { index, hash: None });
    }

    Ok(ResourceRequest {
        algorithms,
        locator: locator.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[Algorithm] = &[Algorithm::Sha256];

    #[test]
    fn bare_entry_uses_defaults() {
        let requests = validate(&[RequestEntry::bare("a.txt")], DEFAULTS).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].locator, "a.txt");
        assert_eq!(requests[0].algorithms, vec![Algorithm::Sha256]);
    }

    #[test]
    fn explicit_names_resolve_in_order() {
        let entry = RequestEntry::with_algorithms(["sha512", "blake3"], "a.txt");
        let requests = validate(&[entry], DEFAULTS).unwrap();
        assert_eq!(
            requests[0].algorithms,
            vec![Algorithm::Sha512, Algorithm::Blake3]
        );
    }

    #[test]
    fn empty_locator_is_invalid_resource() {
        let err = validate(&[RequestEntry::bare("")], DEFAULTS).unwrap_err();
        assert_eq!(err, RequestError::InvalidResource { index: 1 });
    }

    #[test]
    fn empty_algorithm_list_is_invalid_hash() {
        let entry = RequestEntry::WithAlgorithms(vec![], "a.txt".into());
        let err = validate(&[entry], DEFAULTS).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidHash {
                index: 1,
                hash: None
            }
        );
    }

    #[test]
    fn first_unknown_name_wins() {
        let entry = RequestEntry::with_algorithms(["sha256", "sha1024", "md6"], "a.txt");
        let err = validate(&[entry], DEFAULTS).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidHash {
                index: 1,
                hash: Some("sha1024".into())
            }
        );
    }

    #[test]
    fn index_is_one_based_and_fail_fast() {
        let entries = [
            RequestEntry::bare("ok.txt"),
            RequestEntry::with_algorithm("sha1024", "bad.txt"),
            RequestEntry::bare(""),
        ];
        let err = validate(&entries, DEFAULTS).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidHash {
                index: 2,
                hash: Some("sha1024".into())
            }
        );
    }

    #[test]
    fn empty_default_set_rejects_bare_entries() {
        let err = validate(&[RequestEntry::bare("a.txt")], &[]).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidHash {
                index: 1,
                hash: None
            }
        );
    }
}
