/// Cipher-mode tag length in bytes (first byte of the payload).
pub const CIPHER_MODE_LENGTH: usize = 1;

/// AES-CBC initialization vector length in bytes.
pub const IV_LENGTH: usize = 16;

/// HMAC-SHA256 tag length in bytes.
pub const MAC_LENGTH: usize = 32;

/// Minimum decoded payload length: mode byte + IV + (possibly empty
/// ciphertext) + trailing MAC.
pub const MIN_PAYLOAD_LENGTH: usize = CIPHER_MODE_LENGTH + IV_LENGTH + MAC_LENGTH;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// Cipher mode for AES-256-CBC + HMAC-SHA256, the only mode the service
/// currently emits. The byte is reserved for future algorithm agility;
/// anything else is rejected rather than ignored.
pub const CIPHER_MODE_AES_CBC_HMAC: u8 = 0x70;

/// Cipher modes accepted on the decrypt path.
pub const SUPPORTED_CIPHER_MODES: &[u8] = &[CIPHER_MODE_AES_CBC_HMAC];

/// Grace window after a key rotation during which the immediately prior
/// key generation is still accepted, in milliseconds (1 hour).
pub const KEY_ROTATION_GRACE_MS: i64 = 3_600_000;
