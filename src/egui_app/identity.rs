//! Identity provider credential handling.
//!
//! The provider hands back a signed ID token. Only its payload is read here,
//! to learn which email to exchange with the backend `login` action. The
//! signature is not checked and nothing decoded here is trusted for
//! authorization; the backend verifies and returns the authoritative user.

use crate::shared::error::ClientError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

/// Display claims from the credential payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialClaims {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub sub: Option<String>,
}

/// Decode the middle segment of a `header.payload.signature` token
pub fn decode_credential(token: &str) -> Result<CredentialClaims, ClientError> {
    let invalid = |message: &str| ClientError::validation("credential", message);

    let payload = token
        .trim()
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| invalid("credential is not a signed token"))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| invalid(&format!("payload is not base64url: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(|e| invalid(&format!("payload is not valid JSON: {}", e)))
}
