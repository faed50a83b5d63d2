//! Error types.

use core::{error, fmt};

/// SRP authentication error.
#[derive(Debug)]
pub enum SrpAuthError {
    /// A supplied value failed its shape or range check: wrong buffer
    /// length, a public value outside `[1, N-1]`, or an ephemeral secret
    /// that is zero modulo N. Fatal for the session.
    IllegalParameter {
        /// Parameter name
        name: &'static str,
    },
    /// A proof did not match. The peer is inauthentic (or the transcript
    /// was manipulated); close the session without retry.
    BadRecordMac {
        /// Which peer's proof is invalid
        peer: &'static str,
    },
    /// The system CSPRNG failed while generating an ephemeral secret.
    /// Fatal to the in-progress key generation only.
    RandomSource(rand::Error),
}

impl fmt::Display for SrpAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalParameter { name } => {
                write!(f, "illegal_parameter: bad '{name}' value")
            }
            Self::BadRecordMac { peer } => {
                write!(f, "bad_record_mac: incorrect '{peer}' proof")
            }
            Self::RandomSource(err) => {
                write!(f, "random_source: {err}")
            }
        }
    }
}

impl error::Error for SrpAuthError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::RandomSource(err) => Some(err),
            _ => None,
        }
    }
}
