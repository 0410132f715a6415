//! Hash accumulator primitives for streaming digest computation.
//!
//! Provides incremental hashing behind a minimal object-safe trait, plus the
//! registry of algorithms the runtime supports. One accumulator consumes one
//! resource's byte stream; callers feed chunks as they arrive and finalize
//! once at end of stream.
//!
//! # Key Features
//!
//! - **Single-pass**: digests are computed as data streams through
//! - **Name-addressed**: algorithms resolve from their wire name (`"sha256"`,
//!   `"sha3-512"`, ...) at validation time, never later
//! - **Extensible**: the `Accumulator` trait allows custom implementations
//!
//! # Example
//!
//! ```
//! use vouch_hash::Algorithm;
//!
//! let algorithm = Algorithm::from_name("sha256").unwrap();
//! let mut accumulator = algorithm.accumulator();
//! accumulator.update(b"hello");
//! let digest = accumulator.finalize();
//! assert_eq!(digest.len(), 32);
//! ```

pub use self::accumulator::Accumulator;
pub use self::registry::Algorithm;

mod accumulator;
mod registry;
