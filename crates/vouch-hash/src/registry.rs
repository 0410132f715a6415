use std::fmt;

use digest::Digest;

use crate::accumulator::{Accumulator, Blake3Accumulator, DigestAccumulator};

/// The set of digest algorithms this runtime supports.
///
/// Names follow the OpenSSL spelling (`"sha256"`, `"sha3-512"`,
/// `"blake2b512"`). Resolution is exact and case-sensitive; anything not in
/// [`Algorithm::ALL`] is rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Blake2b512,
    Blake2s256,
    Blake3,
}

impl Algorithm {
    /// Every supported algorithm, in listing order.
    pub const ALL: &'static [Algorithm] = &[
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
        Algorithm::Blake2b512,
        Algorithm::Blake2s256,
        Algorithm::Blake3,
    ];

    /// Resolve a wire name to an algorithm, if supported.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name {
            "md5" => Some(Algorithm::Md5),
            "sha1" => Some(Algorithm::Sha1),
            "sha224" => Some(Algorithm::Sha224),
            "sha256" => Some(Algorithm::Sha256),
            "sha384" => Some(Algorithm::Sha384),
            "sha512" => Some(Algorithm::Sha512),
            "sha3-224" => Some(Algorithm::Sha3_224),
            "sha3-256" => Some(Algorithm::Sha3_256),
            "sha3-384" => Some(Algorithm::Sha3_384),
            "sha3-512" => Some(Algorithm::Sha3_512),
            "blake2b512" => Some(Algorithm::Blake2b512),
            "blake2s256" => Some(Algorithm::Blake2s256),
            "blake3" => Some(Algorithm::Blake3),
            _ => None,
        }
    }

    /// The wire name, as accepted by [`Algorithm::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_512 => "sha3-512",
            Algorithm::Blake2b512 => "blake2b512",
            Algorithm::Blake2s256 => "blake2s256",
            Algorithm::Blake3 => "blake3",
        }
    }

    /// Create a fresh accumulator for this algorithm.
    pub fn accumulator(self) -> Box<dyn Accumulator> {
        match self {
            Algorithm::Md5 => Box::new(DigestAccumulator(md5::Md5::new())),
            Algorithm::Sha1 => Box::new(DigestAccumulator(sha1::Sha1::new())),
            Algorithm::Sha224 => Box::new(DigestAccumulator(sha2::Sha224::new())),
            Algorithm::Sha256 => Box::new(DigestAccumulator(sha2::Sha256::new())),
            Algorithm::Sha384 => Box::new(DigestAccumulator(sha2::Sha384::new())),
            Algorithm::Sha512 => Box::new(DigestAccumulator(sha2::Sha512::new())),
            Algorithm::Sha3_224 => Box::new(DigestAccumulator(sha3::Sha3_224::new())),
            Algorithm::Sha3_256 => Box::new(DigestAccumulator(sha3::Sha3_256::new())),
            Algorithm::Sha3_384 => Box::new(DigestAccumulator(sha3::Sha3_384::new())),
            Algorithm::Sha3_512 => Box::new(DigestAccumulator(sha3::Sha3_512::new())),
            Algorithm::Blake2b512 => Box::new(DigestAccumulator(blake2::Blake2b512::new())),
            Algorithm::Blake2s256 => Box::new(DigestAccumulator(blake2::Blake2s256::new())),
            Algorithm::Blake3 => Box::new(Blake3Accumulator(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
