//! Access token formatting, parsing, and verifier input construction.

use std::{fmt, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::staff::records::StaffUuid;

/// Access token identifier prefix.
pub const ACCESS_TOKEN_PREFIX: &str = "fd";

/// Number of secret bytes encoded in a token.
pub const ACCESS_TOKEN_SECRET_BYTES: usize = 32;

const ACCESS_TOKEN_SECRET_HEX_CHARS: usize = ACCESS_TOKEN_SECRET_BYTES * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessTokenVersion {
    V1,
}

impl AccessTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for AccessTokenVersion {
    type Error = AccessTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(AccessTokenError::UnsupportedVersion),
        }
    }
}

impl From<AccessTokenVersion> for i16 {
    fn from(value: AccessTokenVersion) -> Self {
        value.as_i16()
    }
}

impl FromStr for AccessTokenVersion {
    type Err = AccessTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(AccessTokenError::UnsupportedVersion),
        }
    }
}

/// Secret half of an access token. Zeroed on drop, redacted in Debug.
#[derive(Clone)]
pub struct AccessTokenSecret {
    bytes: [u8; ACCESS_TOKEN_SECRET_BYTES],
}

impl AccessTokenSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ACCESS_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ACCESS_TOKEN_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for AccessTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessTokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for AccessTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// The pieces of a well-formed bearer token.
#[derive(Debug, Clone)]
pub struct ParsedAccessToken {
    pub token_uuid: Uuid,
    pub version: AccessTokenVersion,
    pub secret: AccessTokenSecret,
}

#[derive(Debug, Error)]
pub enum AccessTokenError {
    #[error("access token format is invalid")]
    InvalidFormat,

    #[error("access token uses an unsupported version")]
    UnsupportedVersion,

    #[error("access token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_access_token_secret() -> AccessTokenSecret {
    let mut secret = [0_u8; ACCESS_TOKEN_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    AccessTokenSecret::from_bytes(secret)
}

/// Render a token in its transport form:
/// `fd_v1_<token uuid, 32 hex chars>_<secret, 64 hex chars>`.
#[must_use]
pub fn format_access_token(
    token_uuid: Uuid,
    version: AccessTokenVersion,
    secret: &AccessTokenSecret,
) -> String {
    format!(
        "{ACCESS_TOKEN_PREFIX}_{}_{}_{}",
        version.segment(),
        token_uuid.simple(),
        hex_encode(secret.as_bytes()),
    )
}

/// Split a bearer token back into its parts.
///
/// # Errors
///
/// Returns an [`AccessTokenError`] when the shape, version segment, or
/// secret encoding does not match the transport form.
pub fn parse_access_token(token: &str) -> Result<ParsedAccessToken, AccessTokenError> {
    let mut segments = token.split('_');

    let prefix = segments.next().ok_or(AccessTokenError::InvalidFormat)?;
    let version = segments.next().ok_or(AccessTokenError::InvalidFormat)?;
    let token_uuid = segments.next().ok_or(AccessTokenError::InvalidFormat)?;
    let secret = segments.next().ok_or(AccessTokenError::InvalidFormat)?;

    if prefix != ACCESS_TOKEN_PREFIX || segments.next().is_some() {
        return Err(AccessTokenError::InvalidFormat);
    }

    let version: AccessTokenVersion = version.parse()?;

    let token_uuid =
        Uuid::try_parse(token_uuid).map_err(|_| AccessTokenError::InvalidFormat)?;

    if secret.len() != ACCESS_TOKEN_SECRET_HEX_CHARS {
        return Err(AccessTokenError::InvalidSecretEncoding);
    }

    let secret = hex_decode(secret)?;

    Ok(ParsedAccessToken {
        token_uuid,
        version,
        secret,
    })
}

/// The byte string whose HMAC is stored as the token's verifier. Binding
/// the staff account in keeps a token from being replayed for another
/// operator.
#[must_use]
pub fn build_verifier_input(
    token_uuid: &Uuid,
    version: AccessTokenVersion,
    staff_uuid: &StaffUuid,
    secret: &AccessTokenSecret,
) -> Vec<u8> {
    let mut input = Vec::with_capacity(128);

    input.extend_from_slice(version.segment().as_bytes());
    input.push(b'|');
    input.extend_from_slice(token_uuid.as_bytes());
    input.push(b'|');
    input.extend_from_slice(staff_uuid.into_uuid().as_bytes());
    input.push(b'|');
    input.extend_from_slice(secret.as_bytes());

    input
}

fn hex_encode(bytes: &[u8]) -> String {
    use fmt::Write as _;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, byte| {
            // Writing to a String cannot fail.
            let _ = write!(out, "{byte:02x}");
            out
        },
    )
}

fn hex_decode(value: &str) -> Result<AccessTokenSecret, AccessTokenError> {
    let mut bytes = [0_u8; ACCESS_TOKEN_SECRET_BYTES];

    for (slot, pair) in bytes.iter_mut().zip(value.as_bytes().chunks_exact(2)) {
        let pair =
            std::str::from_utf8(pair).map_err(|_| AccessTokenError::InvalidSecretEncoding)?;

        *slot = u8::from_str_radix(pair, 16)
            .map_err(|_| AccessTokenError::InvalidSecretEncoding)?;
    }

    Ok(AccessTokenSecret::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_the_transport_form() {
        let token_uuid = Uuid::now_v7();
        let secret = generate_access_token_secret();

        let token = format_access_token(token_uuid, AccessTokenVersion::V1, &secret);
        let parsed = parse_access_token(&token).expect("freshly formatted token must parse");

        assert_eq!(parsed.token_uuid, token_uuid);
        assert_eq!(parsed.version, AccessTokenVersion::V1);
        assert_eq!(parsed.secret.as_bytes(), secret.as_bytes());
    }

    #[test]
    fn foreign_prefixes_are_rejected() {
        let token_uuid = Uuid::now_v7();
        let secret = generate_access_token_secret();

        let token = format_access_token(token_uuid, AccessTokenVersion::V1, &secret);
        let forged = token.replacen("fd_", "xx_", 1);

        assert!(matches!(
            parse_access_token(&forged),
            Err(AccessTokenError::InvalidFormat)
        ));
    }

    #[test]
    fn unsupported_versions_are_rejected() {
        let token_uuid = Uuid::now_v7();
        let secret = generate_access_token_secret();

        let token = format_access_token(token_uuid, AccessTokenVersion::V1, &secret);
        let forged = token.replacen("_v1_", "_v9_", 1);

        assert!(matches!(
            parse_access_token(&forged),
            Err(AccessTokenError::UnsupportedVersion)
        ));
    }

    #[test]
    fn truncated_secrets_are_rejected() {
        let token_uuid = Uuid::now_v7();
        let secret = generate_access_token_secret();

        let mut token = format_access_token(token_uuid, AccessTokenVersion::V1, &secret);
        token.truncate(token.len() - 2);

        assert!(matches!(
            parse_access_token(&token),
            Err(AccessTokenError::InvalidSecretEncoding)
        ));
    }

    #[test]
    fn verifier_input_differs_per_staff_account() {
        let token_uuid = Uuid::now_v7();
        let secret = generate_access_token_secret();

        let input_a = build_verifier_input(
            &token_uuid,
            AccessTokenVersion::V1,
            &StaffUuid::new(),
            &secret,
        );
        let input_b = build_verifier_input(
            &token_uuid,
            AccessTokenVersion::V1,
            &StaffUuid::new(),
            &secret,
        );

        assert_ne!(input_a, input_b);
    }

    #[test]
    fn secrets_do_not_leak_through_debug() {
        let secret = generate_access_token_secret();

        assert_eq!(format!("{secret:?}"), "AccessTokenSecret(**redacted**)");
    }
}
