//! [Secure Remote Password][1] (SRP-6a) password-authenticated key
//! exchange.
//!
//! A client holding an identity and password and a server holding only a
//! password verifier derive a mutually-authenticated shared secret over
//! an untrusted channel. The password never crosses the wire, an
//! eavesdropper learns nothing usable for an offline dictionary attack,
//! and a stolen verifier does not directly yield the password.
//!
//! The crate is a pure protocol engine: transport of the exchanged
//! values is the caller's concern, and the values themselves are
//! fixed-width big-endian buffers (`|N|` bytes for public values and the
//! verifier, one digest length for the proofs). Group parameters come
//! from the built-in [RFC 5054][2] table in [`groups`]; each group fixes
//! the hash algorithm used for every derivation under it.
//!
//! # Usage
//!
//! ```
//! use srp6a::{SrpClient, SrpServer};
//! use srp6a::groups::G_2048;
//! use srp6a::utils::{compute_verifier, gen_key};
//!
//! # fn main() -> Result<(), srp6a::SrpAuthError> {
//! // Registration: the client picks a salt, derives the verifier and
//! // sends (identity, salt, verifier) to the server over a protected
//! // channel. The server stores them; the password stays local.
//! let salt = gen_key(32)?;
//! let verifier = compute_verifier(&G_2048, &salt, b"alice", b"password123");
//!
//! // Authentication: each side draws a fresh ephemeral secret.
//! let secret1 = gen_key(32)?;
//! let client = SrpClient::new(&G_2048, &salt, b"alice", b"password123", &secret1)?;
//! let secret2 = gen_key(32)?;
//! let server = SrpServer::new(&G_2048, &verifier, &secret2)?;
//!
//! // The public values cross the wire.
//! let a_pub = client.compute_a_pub();
//! let b_pub = server.compute_b_pub();
//!
//! let client = client.process_reply(&b_pub)?;
//! let server = server.process_reply(&a_pub)?;
//!
//! // Mutual authentication: the server checks the client proof and
//! // releases its own proof only on success.
//! let m2 = server.verify_client(client.proof())?;
//! client.verify_server(m2)?;
//!
//! assert_eq!(client.key(), server.key());
//! # Ok(())
//! # }
//! ```
//!
//! # Security notes
//!
//! Proof comparisons run in constant time. The modular exponentiation
//! itself is not constant-time; this is an accepted property of the
//! protocol, not of the comparisons. Ephemeral secrets should be 32
//! random bytes ([`utils::gen_key`]); shorter secrets are accepted with
//! a warning.
//!
//! [1]: https://en.wikipedia.org/wiki/Secure_Remote_Password_protocol
//! [2]: https://tools.ietf.org/html/rfc5054

#![forbid(unsafe_code)]

pub mod client;
pub mod errors;
pub mod groups;
pub mod server;
pub mod types;
pub mod utils;

pub use crate::client::{SrpClient, SrpClientVerifier};
pub use crate::errors::SrpAuthError;
pub use crate::server::{SrpServer, SrpServerVerifier};
pub use crate::types::{HashAlgorithm, SrpGroup};
