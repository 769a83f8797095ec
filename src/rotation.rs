//! Key rotation and the notification decrypt path.
//!
//! The manager owns the only two key generations ever retained: current
//! and previous. A payload is verified against current first; one that
//! fails is retried against previous only while the rotation grace window
//! is still open. The server may keep sealing under a just-retired key
//! for a short while (in-flight notifications, eventual consistency of
//! key propagation), which is the race the previous generation closes.

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::base64::base64_decode;
use crate::decrypt::decrypt_payload;
use crate::error::PushCryptoError;
use crate::keys::KeyMaterial;
use crate::payload;
use crate::types::{KEY_ROTATION_GRACE_MS, SUPPORTED_CIPHER_MODES};
use crate::verify::verify_payload;

/// The two retained key generations plus the rotation instant.
///
/// Mutated only by `rotate()`, as a single write; the decrypt path works
/// from one cloned snapshot so it never sees a half-updated state.
#[derive(Clone, Default)]
struct KeyRotationState {
    current: Option<KeyMaterial>,
    previous: Option<KeyMaterial>,
    rotated_at_ms: Option<i64>,
}

/// Whether the previous key generation is still eligible. The boundary is
/// inclusive: a payload arriving exactly at the grace cutoff is accepted.
fn in_grace_period(rotated_at_ms: Option<i64>, now_ms: i64) -> bool {
    match rotated_at_ms {
        Some(rotated) => now_ms - rotated <= KEY_ROTATION_GRACE_MS,
        None => false,
    }
}

/// Owns the push-notification key state and drives payload decryption.
///
/// `rotate()` and `decrypt_notification()` may run concurrently from
/// different threads; the state sits behind a `parking_lot::RwLock` and
/// every decrypt takes one consistent snapshot up front.
#[derive(Default)]
pub struct KeyRotationManager {
    state: RwLock<KeyRotationState>,
}

impl KeyRotationManager {
    /// Create a manager with no key generations yet. Keys exist only
    /// after the first `rotate()`, which the registration flow invokes
    /// once a new pair has been registered with the service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly generated key pair as current, moving the prior
    /// current into previous and stamping the rotation time. All three
    /// fields update under one write lock.
    pub fn rotate(&self) -> Result<(), PushCryptoError> {
        let fresh = KeyMaterial::generate()?;
        let mut state = self.state.write();
        state.previous = state.current.take();
        state.current = Some(fresh);
        state.rotated_at_ms = Some(Utc::now().timestamp_millis());
        debug!("rotated push notification key generation");
        Ok(())
    }

    /// The current generation's secrets in base64 form, for handing to
    /// the registrar so the service knows which keys to seal under.
    pub fn registration_keys(&self) -> Option<KeyMaterial> {
        self.state.read().current.clone()
    }

    /// Verify and decrypt an inbound notification payload.
    ///
    /// `encrypted` is the base64 string carried in the push payload's
    /// data section, or `None` when that section is absent. Verification
    /// always precedes decryption; a payload that no eligible key
    /// generation authenticates fails with `InvalidSignature` and is
    /// never fed to the cipher.
    pub fn decrypt_notification(
        &self,
        encrypted: Option<&str>,
    ) -> Result<String, PushCryptoError> {
        let encrypted = match encrypted {
            Some(s) if !s.is_empty() => s,
            _ => return Err(PushCryptoError::EmptyPayload),
        };
        let raw = base64_decode(encrypted).map_err(|_| PushCryptoError::MalformedPayload)?;
        let parsed = payload::parse(&raw)?;

        // Reserved mode byte fails closed: an unrecognized value is
        // rejected before any key is consulted.
        if !SUPPORTED_CIPHER_MODES.contains(&parsed.cipher_mode) {
            return Err(PushCryptoError::UnsupportedCipherMode(parsed.cipher_mode));
        }

        // One snapshot for both attempts.
        let snapshot = self.state.read().clone();

        if let Some(current) = &snapshot.current {
            if verify_payload(parsed.signed_region, &current.auth_key, parsed.mac)? {
                return decrypt_payload(parsed.cipher_text, parsed.iv, &current.aes_key);
            }
        }

        if let Some(previous) = &snapshot.previous {
            if in_grace_period(snapshot.rotated_at_ms, Utc::now().timestamp_millis())
                && verify_payload(parsed.signed_region, &previous.auth_key, parsed.mac)?
            {
                debug!("payload authenticated under previous key generation");
                return decrypt_payload(parsed.cipher_text, parsed.iv, &previous.aes_key);
            }
        }

        warn!("payload failed authentication under every eligible key generation");
        Err(PushCryptoError::InvalidSignature)
    }
}
