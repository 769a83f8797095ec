//! Encrypted chat push-notification payload pipeline.
//!
//! A notification arrives as a base64 blob laid out as
//! `[cipher mode:1][IV:16][AES-256-CBC ciphertext][HMAC-SHA256:32]`.
//! [`KeyRotationManager`] parses it, authenticates it against the current
//! key generation (falling back to the previous generation inside a
//! bounded grace window after a rotation), and only then decrypts the
//! JSON event body. Registration transport and key provisioning live
//! outside this crate; it only exposes the current secrets for the
//! registrar to hand to the service.

pub mod base64;
pub mod decrypt;
pub mod error;
pub mod event;
pub mod keys;
pub mod payload;
pub mod rotation;
pub mod seal;
pub mod types;
pub mod verify;

pub use base64::{base64_decode, base64_encode};
pub use decrypt::decrypt_payload;
pub use error::PushCryptoError;
pub use event::{parse_event, ChatMessageEvent};
pub use keys::KeyMaterial;
pub use payload::{parse, ParsedPayload};
pub use rotation::KeyRotationManager;
pub use seal::seal_payload;
pub use types::{
    CIPHER_MODE_AES_CBC_HMAC, IV_LENGTH, KEY_ROTATION_GRACE_MS, MAC_LENGTH, MIN_PAYLOAD_LENGTH,
};
pub use verify::verify_payload;
