use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushCryptoError {
    #[error("Notification payload has no data section")]
    EmptyPayload,

    #[error("Notification payload is malformed")]
    MalformedPayload,

    #[error("Unrecognized cipher mode: {0:#04x}")]
    UnsupportedCipherMode(u8),

    #[error("Key secret is not valid base64")]
    InvalidKeyEncoding,

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Computed signature does not match the included signature")]
    InvalidSignature,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
