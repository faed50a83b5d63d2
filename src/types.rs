//! Group descriptor and hash selection.

use digest::Digest;
use num_bigint::BigUint;
use sha2::{Sha256, Sha512};

/// Hash algorithm bound to an SRP group.
///
/// Every derivation in a protocol run (x, k, u, K, M1, M2) uses the hash
/// named by the group descriptor, so both peers agree by construction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    pub(crate) fn hasher(self) -> Hasher {
        match self {
            Self::Sha256 => Hasher::Sha256(Sha256::new()),
            Self::Sha512 => Hasher::Sha512(Sha512::new()),
        }
    }
}

/// Streaming hasher over the algorithms a group may name. The digest of
/// `update` calls x1, x2, ... equals the digest of the concatenation
/// x1 | x2 | ...
pub(crate) enum Hasher {
    Sha256(Sha256),
    Sha512(Sha512),
}

impl Hasher {
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        match self {
            Self::Sha256(d) => d.update(data),
            Self::Sha512(d) => d.update(data),
        }
    }

    pub fn finalize(self) -> Vec<u8> {
        match self {
            Self::Sha256(d) => d.finalize().to_vec(),
            Self::Sha512(d) => d.finalize().to_vec(),
        }
    }
}

/// Group used for SRP computations
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SrpGroup {
    /// A large safe prime (N = 2q+1, where q is prime)
    pub n: BigUint,
    /// A generator modulo N
    pub g: BigUint,
    /// Bit length of N, rounded up to a whole number of octets; all wire
    /// encodings of group elements are `n_length_bits / 8` bytes wide.
    pub n_length_bits: usize,
    /// Hash algorithm used for every derivation under this group.
    pub hash: HashAlgorithm,
}

impl SrpGroup {
    /// Initialize a new group from big-endian encodings of N and g.
    ///
    /// Panics if g is outside `[2, N-2]`; the supplied prime is trusted.
    pub fn new(n: &[u8], g: &[u8], hash: HashAlgorithm) -> Self {
        let n = BigUint::from_bytes_be(n);
        let g = BigUint::from_bytes_be(g);
        assert!(
            g >= BigUint::from(2u32) && g <= &n - 2u32,
            "g must lie in [2, N-2]"
        );
        let n_length_bits = (n.bits() as usize).div_ceil(8) * 8;
        Self {
            n,
            g,
            n_length_bits,
            hash,
        }
    }

    /// Wire width of group elements, in bytes.
    #[must_use]
    pub const fn n_width(&self) -> usize {
        self.n_length_bits / 8
    }

    // g^exp % N
    #[must_use]
    pub fn powm(&self, exp: &BigUint) -> BigUint {
        self.g.modpow(exp, &self.n)
    }
}

#[cfg(test)]
mod tests {
    use crate::groups::G_1024;
    use crate::utils::compute_k;
    use hex_literal::hex;

    #[test]
    fn test_k_1024_sha256() {
        let k = compute_k(&G_1024);
        assert_eq!(
            k.to_bytes_be(),
            hex!("1A1A4C14 0CDE70AE 360C1EC3 3A33155B 1022DF95 1732A476 A862EB3A B8206A5C")
        );
    }
}
