//! Padding, derivation and key-generation primitives.
//!
//! The `compute_*` family implements the SRP-6a derivations over a group
//! descriptor; the state machines in [`crate::client`] and
//! [`crate::server`] sequence them. They are public so that callers (and
//! the test suite) can recompute individual protocol values.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::SrpAuthError;
use crate::types::SrpGroup;

/// Ephemeral secrets shorter than this many bytes trigger a warning.
pub const DEFAULT_EPHEMERAL_LENGTH: usize = 32;

/// Fixed-width unsigned big-endian encoding, left-padded with zeros.
///
/// Callers reduce mod N before encoding; a wider integer is a bug here,
/// not bad input.
pub(crate) fn pad(n: &BigUint, width: usize) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    assert!(bytes.len() <= width, "integer exceeds the encoding width");
    let mut buf = vec![0u8; width];
    buf[width - bytes.len()..].copy_from_slice(&bytes);
    buf
}

// H(data)
#[must_use]
pub fn compute_hash(group: &SrpGroup, data: &[u8]) -> Vec<u8> {
    let mut d = group.hash.hasher();
    d.update(data);
    d.finalize()
}

// x = H(salt | H(I | ":" | P))
#[must_use]
pub fn compute_x(group: &SrpGroup, salt: &[u8], identity: &[u8], password: &[u8]) -> BigUint {
    let mut d = group.hash.hasher();
    d.update(identity);
    d.update(b":");
    d.update(password);
    let identity_hash = d.finalize();

    let mut d = group.hash.hasher();
    d.update(salt);
    d.update(&identity_hash);
    BigUint::from_bytes_be(&d.finalize())
}

/// Password verifier v = g^x % N for user registration on the server,
/// encoded to the group's wire width.
///
/// Deterministic: identical inputs yield byte-identical output.
#[must_use]
pub fn compute_verifier(
    group: &SrpGroup,
    salt: &[u8],
    identity: &[u8],
    password: &[u8],
) -> Vec<u8> {
    let x = compute_x(group, salt, identity, password);
    pad(&group.powm(&x), group.n_width())
}

// k = H(PAD(N) | PAD(g))
#[must_use]
pub fn compute_k(group: &SrpGroup) -> BigUint {
    let width = group.n_width();
    let mut d = group.hash.hasher();
    d.update(pad(&group.n, width));
    d.update(pad(&group.g, width));
    BigUint::from_bytes_be(&d.finalize())
}

// u = H(PAD(A) | PAD(B)), over the wire-format buffers
#[must_use]
pub fn compute_u(group: &SrpGroup, a_pub: &[u8], b_pub: &[u8]) -> BigUint {
    let mut d = group.hash.hasher();
    d.update(a_pub);
    d.update(b_pub);
    BigUint::from_bytes_be(&d.finalize())
}

// M1 = H(PAD(A) | PAD(B) | PAD(S))
#[must_use]
pub fn compute_m1(group: &SrpGroup, a_pub: &[u8], b_pub: &[u8], premaster: &[u8]) -> Vec<u8> {
    let mut d = group.hash.hasher();
    d.update(a_pub);
    d.update(b_pub);
    d.update(premaster);
    d.finalize()
}

// M2 = H(PAD(A) | M1 | K)
#[must_use]
pub fn compute_m2(group: &SrpGroup, a_pub: &[u8], m1: &[u8], key: &[u8]) -> Vec<u8> {
    let mut d = group.hash.hasher();
    d.update(a_pub);
    d.update(m1);
    d.update(key);
    d.finalize()
}

/// Draw `n_bytes` random bytes from the system CSPRNG.
///
/// Intended for ephemeral secrets and salts; 32 bytes is the
/// recommended ephemeral width. A failing random source is reported as
/// [`SrpAuthError::RandomSource`] and no partially-filled buffer is ever
/// returned. Concurrent calls draw independently.
pub fn gen_key(n_bytes: usize) -> Result<Vec<u8>, SrpAuthError> {
    let mut buf = vec![0u8; n_bytes];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(SrpAuthError::RandomSource)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_adds_leading_zeros() {
        let n = BigUint::from(0x0102u32);
        assert_eq!(pad(&n, 4), [0, 0, 1, 2]);
        assert_eq!(pad(&n, 2), [1, 2]);
        assert_eq!(pad(&BigUint::default(), 3), [0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "encoding width")]
    fn pad_rejects_oversized_integer() {
        pad(&BigUint::from(0x010203u32), 2);
    }

    #[test]
    fn gen_key_lengths() {
        let key = gen_key(DEFAULT_EPHEMERAL_LENGTH).unwrap();
        assert_eq!(key.len(), DEFAULT_EPHEMERAL_LENGTH);
        assert!(gen_key(0).unwrap().is_empty());
    }

    #[test]
    fn gen_key_draws_independently() {
        let k1 = gen_key(32).unwrap();
        let k2 = gen_key(32).unwrap();
        assert_ne!(k1, k2);
    }
}
