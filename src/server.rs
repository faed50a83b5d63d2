//! SRP server implementation
//!
//! # Usage
//! First receive the user's username and public value `a_pub`, retrieve
//! from the database the salt and verifier stored for that username, and
//! initialize the server state with a fresh ephemeral secret:
//!
//! ```ignore
//! use srp6a::groups::G_2048;
//! use srp6a::utils::gen_key;
//!
//! let (username, a_pub) = conn.receive_handshake();
//! let (salt, verifier) = db.retrieve_user(&username);
//! let secret2 = gen_key(32)?;
//! let server = SrpServer::new(&G_2048, &verifier, &secret2)?;
//! ```
//!
//! Next send `b_pub` and the user's salt in the reply, then process the
//! client's public value:
//!
//! ```ignore
//! conn.reply_to_handshake(&salt, server.compute_b_pub());
//! let verifier = server.process_reply(&a_pub)?;
//! ```
//!
//! And finally receive the user proof, verify it and send the server
//! proof in the reply. The proof check is the password check: it fails
//! on a mismatched password or a manipulated transcript, and M2 is
//! released only on success:
//!
//! ```ignore
//! let m1 = conn.receive_proof();
//! let m2 = verifier.verify_client(&m1)?;
//! conn.send_proof(m2);
//! let key = verifier.key();
//! ```

use log::warn;
use num_bigint::BigUint;
use subtle::ConstantTimeEq;

use crate::errors::SrpAuthError;
use crate::types::SrpGroup;
use crate::utils::{
    compute_hash, compute_k, compute_m1, compute_m2, compute_u, pad, DEFAULT_EPHEMERAL_LENGTH,
};

/// SRP server state before the handshake with the client.
#[derive(Debug)]
pub struct SrpServer<'a> {
    group: &'a SrpGroup,

    v: BigUint,
    b: BigUint,
    b_pub: BigUint,
}

/// SRP server state after the handshake with the client.
#[derive(Debug)]
pub struct SrpServerVerifier {
    u: BigUint,
    premaster: Vec<u8>,
    key: Vec<u8>,
    m1: Vec<u8>,
    m2: Vec<u8>,
}

impl<'a> SrpServer<'a> {
    /// Create new SRP server state from the stored password verifier and
    /// the ephemeral secret `secret2` (interpreted as a big-endian
    /// integer).
    ///
    /// `secret2` must be non-zero modulo N. Secrets shorter than 256 bits
    /// are accepted with a warning; always supplying 32 random bytes is
    /// recommended.
    pub fn new(
        group: &'a SrpGroup,
        verifier: &[u8],
        secret2: &[u8],
    ) -> Result<Self, SrpAuthError> {
        let b = BigUint::from_bytes_be(secret2);
        if &b % &group.n == BigUint::default() {
            return Err(SrpAuthError::IllegalParameter { name: "b" });
        }
        if secret2.len() < DEFAULT_EPHEMERAL_LENGTH {
            warn!("server ephemeral secret is shorter than 256 bits");
        }

        let k = compute_k(group);
        let v = BigUint::from_bytes_be(verifier);

        // B = (k*v + g^b) % N
        let b_pub = (&k * &v + group.powm(&b)) % &group.n;

        Ok(Self { group, v, b, b_pub })
    }

    /// Public ephemeral value for sending to the client, encoded to the
    /// group's wire width.
    #[must_use]
    pub fn compute_b_pub(&self) -> Vec<u8> {
        pad(&self.b_pub, self.group.n_width())
    }

    /// Process the client reply to the handshake.
    ///
    /// `a_pub` must be the client's public value in wire format: exactly
    /// `|N|` bytes, decoding to an integer in `[1, N-1]`.
    pub fn process_reply(self, a_pub: &[u8]) -> Result<SrpServerVerifier, SrpAuthError> {
        let n = &self.group.n;
        let width = self.group.n_width();

        if a_pub.len() != width {
            return Err(SrpAuthError::IllegalParameter { name: "a_pub" });
        }
        let a_int = BigUint::from_bytes_be(a_pub);
        // Safeguard against malicious A
        if a_int == BigUint::default() || a_int >= *n {
            return Err(SrpAuthError::IllegalParameter { name: "a_pub" });
        }

        let b_wire = pad(&self.b_pub, width);
        let u = compute_u(self.group, a_pub, &b_wire);

        // S = (A * v^u) ^ b % N
        let base = (&a_int * self.v.modpow(&u, n)) % n;
        let premaster = pad(&base.modpow(&self.b, n), width);

        let key = compute_hash(self.group, &premaster);
        let m1 = compute_m1(self.group, a_pub, &b_wire, &premaster);
        let m2 = compute_m2(self.group, a_pub, &m1, &key);

        Ok(SrpServerVerifier {
            u,
            premaster,
            key,
            m1,
            m2,
        })
    }
}

impl SrpServerVerifier {
    /// Shared secret key K. Verify the client proof before using it to
    /// grant access.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Process the user proof M1 of having the same shared secret. This
    /// is the server's password check; on success the server proof M2 is
    /// returned for sending to the client, and on failure nothing is
    /// released.
    pub fn verify_client(&self, reply: &[u8]) -> Result<&[u8], SrpAuthError> {
        if self.m1.ct_eq(reply).unwrap_u8() == 1 {
            Ok(&self.m2)
        } else {
            Err(SrpAuthError::BadRecordMac { peer: "client" })
        }
    }

    #[doc(hidden)]
    pub fn scrambler(&self) -> &BigUint {
        &self.u
    }

    #[doc(hidden)]
    pub fn premaster_secret(&self) -> &[u8] {
        &self.premaster
    }
}
