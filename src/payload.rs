//! Push-notification payload wire format.
//!
//! [1 byte: cipher mode][16 bytes: IV][N bytes: ciphertext][32 bytes: HMAC]
//! The HMAC covers everything before it (mode ‖ IV ‖ ciphertext).

use crate::error::PushCryptoError;
use crate::types::{CIPHER_MODE_LENGTH, IV_LENGTH, MAC_LENGTH, MIN_PAYLOAD_LENGTH};

/// A decoded payload partitioned into its four wire fields.
///
/// Slices borrow from the raw buffer; nothing is copied. `signed_region`
/// is the exact byte range the MAC is computed over, i.e. everything
/// except the trailing MAC itself.
#[derive(Debug, Clone, Copy)]
pub struct ParsedPayload<'a> {
    /// Algorithm/versioning tag (first byte, reserved).
    pub cipher_mode: u8,
    /// Block-cipher initialization vector (16 bytes).
    pub iv: &'a [u8],
    /// Encrypted JSON body (may be empty).
    pub cipher_text: &'a [u8],
    /// HMAC-SHA256 tag (trailing 32 bytes).
    pub mac: &'a [u8],
    /// cipher mode ‖ IV ‖ ciphertext.
    pub signed_region: &'a [u8],
}

/// Partition a decoded payload into its wire fields.
///
/// Fails with `MalformedPayload` when the buffer is too short to contain
/// the mode byte, IV, and MAC. No key material is touched.
pub fn parse(raw: &[u8]) -> Result<ParsedPayload<'_>, PushCryptoError> {
    if raw.len() < MIN_PAYLOAD_LENGTH {
        return Err(PushCryptoError::MalformedPayload);
    }

    let mac_offset = raw.len() - MAC_LENGTH;
    Ok(ParsedPayload {
        cipher_mode: raw[0],
        iv: &raw[CIPHER_MODE_LENGTH..CIPHER_MODE_LENGTH + IV_LENGTH],
        cipher_text: &raw[CIPHER_MODE_LENGTH + IV_LENGTH..mac_offset],
        mac: &raw[mac_offset..],
        signed_region: &raw[..mac_offset],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_short() {
        assert!(matches!(
            parse(&[0u8; MIN_PAYLOAD_LENGTH - 1]),
            Err(PushCryptoError::MalformedPayload)
        ));
        assert!(matches!(parse(&[]), Err(PushCryptoError::MalformedPayload)));
    }

    #[test]
    fn minimum_length_has_empty_ciphertext() {
        let raw = [0u8; MIN_PAYLOAD_LENGTH];
        let parsed = parse(&raw).unwrap();
        assert!(parsed.cipher_text.is_empty());
        assert_eq!(parsed.iv.len(), IV_LENGTH);
        assert_eq!(parsed.mac.len(), MAC_LENGTH);
    }

    #[test]
    fn field_offsets() {
        let mut raw = vec![0u8; 100];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }
        let parsed = parse(&raw).unwrap();
        assert_eq!(parsed.cipher_mode, 0);
        assert_eq!(parsed.iv, &raw[1..17]);
        assert_eq!(parsed.cipher_text, &raw[17..68]);
        assert_eq!(parsed.mac, &raw[68..]);
    }

    #[test]
    fn slice_lengths_sum_to_input_length() {
        for len in [MIN_PAYLOAD_LENGTH, 50, 128, 801] {
            let raw = vec![0xabu8; len];
            let parsed = parse(&raw).unwrap();
            assert_eq!(
                CIPHER_MODE_LENGTH + parsed.iv.len() + parsed.cipher_text.len() + parsed.mac.len(),
                len
            );
        }
    }

    #[test]
    fn signed_region_is_everything_but_mac() {
        let mut raw = vec![0u8; 80];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }
        let parsed = parse(&raw).unwrap();
        assert_eq!(parsed.signed_region, &raw[..raw.len() - MAC_LENGTH]);

        let mut rebuilt = vec![parsed.cipher_mode];
        rebuilt.extend_from_slice(parsed.iv);
        rebuilt.extend_from_slice(parsed.cipher_text);
        assert_eq!(rebuilt, parsed.signed_region);
    }
}
