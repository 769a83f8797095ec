//! AES-256-CBC payload decryption.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::base64::base64_decode;
use crate::error::PushCryptoError;
use crate::types::AES_KEY_LENGTH;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt a payload body with AES-256-CBC and PKCS#7 padding.
///
/// The encryption secret is base64; the IV comes from the payload itself.
/// Returns the plaintext as a UTF-8 string (the JSON event body).
///
/// Callers must have authenticated the payload first; this function is
/// never invoked on a payload that failed verification.
pub fn decrypt_payload(
    cipher_text: &[u8],
    iv: &[u8],
    aes_key: &str,
) -> Result<String, PushCryptoError> {
    let key = base64_decode(aes_key).map_err(|_| PushCryptoError::InvalidKeyEncoding)?;
    if key.len() != AES_KEY_LENGTH {
        return Err(PushCryptoError::InvalidKeyLength {
            expected: AES_KEY_LENGTH,
            got: key.len(),
        });
    }

    let plaintext = Aes256CbcDec::new_from_slices(&key, iv)
        .map_err(|e| PushCryptoError::DecryptionFailed(format!("{:?}", e)))?
        .decrypt_padded_vec_mut::<Pkcs7>(cipher_text)
        .map_err(|e| PushCryptoError::DecryptionFailed(format!("{:?}", e)))?;

    String::from_utf8(plaintext)
        .map_err(|_| PushCryptoError::DecryptionFailed("plaintext is not valid UTF-8".into()))
}
