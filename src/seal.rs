//! Service-side counterpart: seal a plaintext event body into the wire
//! format the decrypt path consumes.
//!
//! [0x70][IV:16][AES-256-CBC ciphertext][HMAC-SHA256:32]

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};

use crate::base64::base64_decode;
use crate::error::PushCryptoError;
use crate::types::{AES_KEY_LENGTH, CIPHER_MODE_AES_CBC_HMAC, IV_LENGTH, MAC_LENGTH};
use crate::verify::compute_payload_mac;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Generate a random 16-byte IV for AES-CBC.
pub fn generate_iv() -> Result<[u8; IV_LENGTH], PushCryptoError> {
    let mut iv = [0u8; IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| PushCryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Encrypt a plaintext body with AES-256-CBC and PKCS#7 padding.
pub(crate) fn encrypt_body(
    plaintext: &[u8],
    iv: &[u8; IV_LENGTH],
    aes_key: &str,
) -> Result<Vec<u8>, PushCryptoError> {
    let key = base64_decode(aes_key).map_err(|_| PushCryptoError::InvalidKeyEncoding)?;
    if key.len() != AES_KEY_LENGTH {
        return Err(PushCryptoError::InvalidKeyLength {
            expected: AES_KEY_LENGTH,
            got: key.len(),
        });
    }

    let cipher = Aes256CbcEnc::new_from_slices(&key, iv)
        .map_err(|e| PushCryptoError::EncryptionFailed(format!("{:?}", e)))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Seal a plaintext event body into an authenticated encrypted payload.
///
/// This is what the service does before handing the payload to the push
/// pipeline; in-crate it grounds round-trip and rotation tests. The MAC
/// covers the mode byte, IV, and ciphertext.
pub fn seal_payload(
    plaintext: &[u8],
    aes_key: &str,
    auth_key: &str,
) -> Result<Vec<u8>, PushCryptoError> {
    let iv = generate_iv()?;
    let cipher_text = encrypt_body(plaintext, &iv, aes_key)?;

    let mut payload = Vec::with_capacity(1 + IV_LENGTH + cipher_text.len() + MAC_LENGTH);
    payload.push(CIPHER_MODE_AES_CBC_HMAC);
    payload.extend_from_slice(&iv);
    payload.extend_from_slice(&cipher_text);

    let mac = compute_payload_mac(&payload, auth_key)?;
    payload.extend_from_slice(&mac);
    Ok(payload)
}
