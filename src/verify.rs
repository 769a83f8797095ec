//! HMAC-SHA256 payload authentication.
//!
//! macKey = SHA-256(base64decode(authKey)); tag = HMAC-SHA256(macKey, signedRegion)

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::base64::base64_decode;
use crate::error::PushCryptoError;
use crate::types::MAC_LENGTH;

type HmacSha256 = Hmac<Sha256>;

/// Build the HMAC instance for an auth secret. The base64 secret is
/// decoded and hashed with SHA-256 to normalize it to a fixed-length
/// MAC key.
fn payload_mac(auth_key: &str) -> Result<HmacSha256, PushCryptoError> {
    let decoded = base64_decode(auth_key).map_err(|_| PushCryptoError::InvalidKeyEncoding)?;
    let mac_key = Sha256::digest(&decoded);
    Ok(HmacSha256::new_from_slice(&mac_key).expect("HMAC can take key of any size"))
}

/// Compute the authentication tag for a signed region under an auth secret.
pub(crate) fn compute_payload_mac(
    signed_region: &[u8],
    auth_key: &str,
) -> Result<[u8; MAC_LENGTH], PushCryptoError> {
    let mut mac = payload_mac(auth_key)?;
    mac.update(signed_region);
    Ok(mac.finalize().into_bytes().into())
}

/// Check a payload's authentication tag against an auth secret.
///
/// Returns `Ok(true)` only on an exact 32-byte match; the comparison is
/// constant-time. Fails with `InvalidKeyEncoding` when the secret is not
/// valid base64. Never decrypts anything.
pub fn verify_payload(
    signed_region: &[u8],
    auth_key: &str,
    expected_mac: &[u8],
) -> Result<bool, PushCryptoError> {
    let mut mac = payload_mac(auth_key)?;
    mac.update(signed_region);
    Ok(mac.verify_slice(expected_mac).is_ok())
}
