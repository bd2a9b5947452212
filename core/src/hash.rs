use std::fmt::Display;

use digest::{Digest, DynDigest};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha256, Sha512};

/// All the supported hash algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Returns a streaming hasher for this algorithm.
    ///
    /// The hasher can be reused for many plaintexts by pairing `update` with
    /// `finalize_reset`, whatever the digest width.
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::new(Md5::new()),
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha256 => Box::new(Sha256::new()),
            Self::Sha512 => Box::new(Sha512::new()),
        }
    }

    /// Hashes a single plaintext.
    pub fn digest(&self, plaintext: &[u8]) -> Vec<u8> {
        match self {
            Self::Md5 => Md5::digest(plaintext).to_vec(),
            Self::Sha1 => Sha1::digest(plaintext).to_vec(),
            Self::Sha256 => Sha256::digest(plaintext).to_vec(),
            Self::Sha512 => Sha512::digest(plaintext).to_vec(),
        }
    }

    /// Gets the digest size of this algorithm, in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => <Md5 as Digest>::output_size(),
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
        }
    }
}

impl Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        };

        write!(f, "{name}")
    }
}
