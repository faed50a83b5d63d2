//! SRP client implementation.
//!
//! # Usage
//! First create the SRP client state by passing the group shared with the
//! server, the user's credentials and salt, and a randomly generated
//! ephemeral secret:
//!
//! ```ignore
//! use srp6a::groups::G_2048;
//! use srp6a::utils::gen_key;
//!
//! let secret1 = gen_key(32)?;
//! let client = SrpClient::new(&G_2048, &salt, username, password, &secret1)?;
//! ```
//!
//! Next send the handshake data (username and `a_pub`) to the server and
//! receive `b_pub`:
//!
//! ```ignore
//! let a_pub = client.compute_a_pub();
//! let b_pub = conn.send_handshake(username, a_pub);
//! ```
//!
//! Process the server reply, obtaining the session verifier. Note that
//! `process_reply` consumes the client and returns an error on a
//! malicious `b_pub`:
//!
//! ```ignore
//! let verifier = client.process_reply(&b_pub)?;
//! ```
//!
//! Finally authenticate mutually: send the client proof, and verify the
//! server proof in the reply. `verify_server` returns an error when the
//! server fails to prove possession of the verifier:
//!
//! ```ignore
//! let m2 = conn.send_proof(verifier.proof());
//! verifier.verify_server(&m2)?;
//! let key = verifier.key();
//! ```
//!
//! `key` is the shared secret between user and server. For registration,
//! generate a salt (32 bytes is a reasonable length) and derive the
//! password verifier with [`crate::utils::compute_verifier`]; send
//! username, salt and verifier to the server over a protected channel.

use log::warn;
use num_bigint::BigUint;
use subtle::ConstantTimeEq;

use crate::errors::SrpAuthError;
use crate::types::SrpGroup;
use crate::utils::{
    compute_hash, compute_k, compute_m1, compute_m2, compute_u, compute_x, pad,
    DEFAULT_EPHEMERAL_LENGTH,
};

/// SRP client state before the handshake with the server.
#[derive(Debug)]
pub struct SrpClient<'a> {
    group: &'a SrpGroup,

    k: BigUint,
    x: BigUint,
    a: BigUint,
    a_pub: BigUint,
}

/// SRP client state after the handshake with the server.
///
/// Holds the session key and both proofs; all fields are computed once,
/// when the server reply is processed, and are immutable afterwards.
#[derive(Debug)]
pub struct SrpClientVerifier {
    u: BigUint,
    premaster: Vec<u8>,
    key: Vec<u8>,
    m1: Vec<u8>,
    m2: Vec<u8>,
}

impl<'a> SrpClient<'a> {
    /// Create new SRP client state from the user credentials and the
    /// ephemeral secret `secret1` (interpreted as a big-endian integer).
    ///
    /// `secret1` must be non-zero modulo N. Secrets shorter than 256 bits
    /// are accepted with a warning; always supplying 32 random bytes is
    /// recommended.
    pub fn new(
        group: &'a SrpGroup,
        salt: &[u8],
        identity: &[u8],
        password: &[u8],
        secret1: &[u8],
    ) -> Result<Self, SrpAuthError> {
        let a = BigUint::from_bytes_be(secret1);
        if &a % &group.n == BigUint::default() {
            return Err(SrpAuthError::IllegalParameter { name: "a" });
        }
        if secret1.len() < DEFAULT_EPHEMERAL_LENGTH {
            warn!("client ephemeral secret is shorter than 256 bits");
        }

        let k = compute_k(group);
        let x = compute_x(group, salt, identity, password);
        let a_pub = group.powm(&a);

        Ok(Self {
            group,
            k,
            x,
            a,
            a_pub,
        })
    }

    /// Public ephemeral value for the handshake, encoded to the group's
    /// wire width.
    #[must_use]
    pub fn compute_a_pub(&self) -> Vec<u8> {
        pad(&self.a_pub, self.group.n_width())
    }

    /// Process the server reply to the handshake.
    ///
    /// `b_pub` must be the server's public value in wire format: exactly
    /// `|N|` bytes, decoding to an integer in `[1, N-1]`.
    pub fn process_reply(self, b_pub: &[u8]) -> Result<SrpClientVerifier, SrpAuthError> {
        let n = &self.group.n;
        let width = self.group.n_width();

        if b_pub.len() != width {
            return Err(SrpAuthError::IllegalParameter { name: "b_pub" });
        }
        let b_int = BigUint::from_bytes_be(b_pub);
        // Safeguard against malicious B
        if b_int == BigUint::default() || b_int >= *n {
            return Err(SrpAuthError::IllegalParameter { name: "b_pub" });
        }

        let a_wire = pad(&self.a_pub, width);
        let u = compute_u(self.group, &a_wire, b_pub);

        // S = (B - k*g^x) ^ (a + u*x) % N
        let interm = (&self.k * self.group.powm(&self.x)) % n;
        // Because B is reduced modulo N the difference may go negative in
        // unbounded arithmetic; bring it back into [0, N) first.
        let base = if b_int > interm {
            (&b_int - &interm) % n
        } else {
            (n + &b_int - &interm) % n
        };
        // The exponent is used unreduced: a + u*x can exceed N and
        // reducing it modulo N would change the result.
        let exp = &self.a + &u * &self.x;
        let premaster = pad(&base.modpow(&exp, n), width);

        let key = compute_hash(self.group, &premaster);
        let m1 = compute_m1(self.group, &a_wire, b_pub, &premaster);
        let m2 = compute_m2(self.group, &a_wire, &m1, &key);

        Ok(SrpClientVerifier {
            u,
            premaster,
            key,
            m1,
            m2,
        })
    }
}

impl SrpClientVerifier {
    /// Shared secret key K. Authenticate the server with
    /// [`Self::verify_server`] before trusting it, unless the key is
    /// consumed by some other authenticated mechanism.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Proof M1 for sending to the server.
    #[must_use]
    pub fn proof(&self) -> &[u8] {
        &self.m1
    }

    /// Verify the server proof M2. This is the only channel by which the
    /// client learns the server is inauthentic.
    pub fn verify_server(&self, reply: &[u8]) -> Result<(), SrpAuthError> {
        if self.m2.ct_eq(reply).unwrap_u8() == 1 {
            Ok(())
        } else {
            Err(SrpAuthError::BadRecordMac { peer: "server" })
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
