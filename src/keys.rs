//! Key material for one generation of push-notification keys.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base64::base64_encode;
use crate::error::PushCryptoError;
use crate::types::AES_KEY_LENGTH;

/// One key generation: an encryption secret and an authentication secret,
/// both base64-encoded 256-bit random values. The two are independent,
/// not derived from each other.
///
/// Move-only value owned by the rotation manager; zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    /// AES-256 encryption secret, base64.
    pub aes_key: String,
    /// HMAC authentication secret, base64. Hashed with SHA-256 before use
    /// as a MAC key.
    pub auth_key: String,
}

impl KeyMaterial {
    /// Generate a fresh key generation from the system RNG.
    pub fn generate() -> Result<Self, PushCryptoError> {
        Ok(Self {
            aes_key: random_secret_b64()?,
            auth_key: random_secret_b64()?,
        })
    }
}

fn random_secret_b64() -> Result<String, PushCryptoError> {
    let mut secret = [0u8; AES_KEY_LENGTH];
    getrandom::getrandom(&mut secret).map_err(|e| PushCryptoError::RngFailed(e.to_string()))?;
    let encoded = base64_encode(&secret);
    secret.zeroize();
    Ok(encoded)
}
