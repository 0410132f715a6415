//! Process-wide fallback algorithm set.
//!
//! Read by validation for every entry that omits an explicit algorithm list.
//! Reads snapshot the whole list under one lock acquisition and replacements
//! are all-or-nothing, so an in-flight batch never observes a torn update.

use std::sync::RwLock;

use once_cell::sync::Lazy;
use vouch_hash::Algorithm;

static DEFAULTS: Lazy<RwLock<Vec<Algorithm>>> =
    Lazy::new(|| RwLock::new(vec![Algorithm::Sha256]));

/// Atomic snapshot of the current fallback set.
pub fn default_algorithms() -> Vec<Algorithm> {
    DEFAULTS.read().expect("defaults lock poisoned").clone()
}

/// Replace the fallback set wholesale.
///
/// Returns `false` without touching the stored set when `candidates` is empty
/// or contains a name the registry does not know. On success the previous set
/// is discarded entirely, never merged.
pub fn set_default_algorithms<S: AsRef<str>>(candidates: &[S]) -> bool {
    if candidates.is_empty() {
        return false;
    }

    let mut resolved = Vec::with_capacity(candidates.len());
    for name in candidates {
        match Algorithm::from_name(name.as_ref()) {
            Some(algorithm) => resolved.push(algorithm),
            None => return false,
        }
    }

    *DEFAULTS.write().expect("defaults lock poisoned") = resolved;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry is process state shared by every test in this binary, so
    // the whole replace/reject sequence lives in a single test.
    #[test]
    fn replace_is_all_or_nothing() {
        assert_eq!(default_algorithms(), vec![Algorithm::Sha256]);

        assert!(!set_default_algorithms::<&str>(&[]));
        assert!(!set_default_algorithms(&["not-a-real-algorithm"]));
        assert_eq!(default_algorithms(), vec![Algorithm::Sha256]);

        assert!(set_default_algorithms(&["sha512", "sha384"]));
        assert_eq!(
            default_algorithms(),
            vec![Algorithm::Sha512, Algorithm::Sha384]
        );

        // One bad name rejects the whole candidate list.
        assert!(!set_default_algorithms(&["sha256", "sha1024"]));
        assert_eq!(
            default_algorithms(),
            vec![Algorithm::Sha512, Algorithm::Sha384]
        );

        assert!(set_default_algorithms(&["sha256"]));
        assert_eq!(default_algorithms(), vec![Algorithm::Sha256]);
    }
}
