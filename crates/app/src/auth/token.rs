//! Session token formatting, parsing, and digest construction.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroize;

/// Session token identifier prefix.
pub const SESSION_TOKEN_PREFIX: &str = "fl";

/// Number of secret bytes encoded in a token.
pub const SESSION_SECRET_BYTES: usize = 32;

const SESSION_SECRET_HEX_CHARS: usize = SESSION_SECRET_BYTES * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTokenVersion {
    V1,
}

impl SessionTokenVersion {
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl FromStr for SessionTokenVersion {
    type Err = SessionTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(SessionTokenError::UnsupportedVersion),
        }
    }
}

/// Random session secret, wiped from memory on drop.
#[derive(Clone)]
pub struct SessionSecret {
    bytes: [u8; SESSION_SECRET_BYTES],
}

impl SessionSecret {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SESSION_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(**redacted**)")
    }
}

impl Drop for SessionSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("session token format is invalid")]
    InvalidFormat,

    #[error("session token uses an unsupported version")]
    UnsupportedVersion,
}

/// Generate a fresh session secret from the OS random source.
#[must_use]
pub fn generate_session_secret() -> SessionSecret {
    let mut bytes = [0_u8; SESSION_SECRET_BYTES];

    OsRng.fill_bytes(&mut bytes);

    SessionSecret { bytes }
}

/// Render a session token in its wire form, e.g. `fl_v1_<64 hex chars>`.
#[must_use]
pub fn format_session_token(version: SessionTokenVersion, secret: &SessionSecret) -> String {
    format!(
        "{SESSION_TOKEN_PREFIX}_{}_{}",
        version.segment(),
        bytes_to_hex(secret.as_bytes())
    )
}

/// Validate the shape of a session token and return its version.
///
/// # Errors
///
/// Returns [`SessionTokenError`] for malformed or unsupported tokens.
pub fn parse_session_token(token: &str) -> Result<SessionTokenVersion, SessionTokenError> {
    let mut parts = token.splitn(3, '_');

    let prefix = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let version = parts.next().ok_or(SessionTokenError::InvalidFormat)?;
    let secret = parts.next().ok_or(SessionTokenError::InvalidFormat)?;

    if prefix != SESSION_TOKEN_PREFIX {
        return Err(SessionTokenError::InvalidFormat);
    }

    let version = version.parse::<SessionTokenVersion>()?;

    if secret.len() != SESSION_SECRET_HEX_CHARS
        || !secret.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
    {
        return Err(SessionTokenError::InvalidFormat);
    }

    Ok(version)
}

/// Digest of a raw session token as stored server-side.
#[must_use]
pub(crate) fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// Digest of a plaintext password as stored server-side.
#[must_use]
pub(crate) fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    use fmt::Write as _;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, byte| {
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}
