// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Symmetric payload encryption.
//!
//! Payloads are encrypted with AES-256-GCM-SIV under a fresh random 32-byte
//! key generated per encode and handed back to the caller — key persistence
//! is a collaborator concern, nothing is derived or stored here. The 12-byte
//! nonce is random per encryption and travels in front of the ciphertext, so
//! the wire form is self-describing:
//!
//! ```text
//! [12 bytes    ] nonce
//! [N + 16 bytes] AES-256-GCM-SIV ciphertext + auth tag
//! ```
//!
//! AES-256-GCM-SIV is chosen over AES-256-GCM for its nonce-misuse
//! resistance, an extra safety margin since the nonce is randomly generated
//! and embedded alongside the ciphertext.

use core::fmt;

use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use zeroize::Zeroizing;

use crate::stego::error::StegoError;

/// Symmetric key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;
/// AES-GCM-SIV nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// AES-GCM-SIV authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// A per-operation symmetric key. The raw bytes are zeroed on drop.
pub struct SymmetricKey(Zeroizing<[u8; KEY_LEN]>);

impl SymmetricKey {
    /// Generate a fresh random key from the OS RNG.
    pub fn generate() -> Self {
        use rand::RngCore;
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        rand::thread_rng().fill_bytes(&mut *bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Parse a key from its 64-character lowercase hex form.
    ///
    /// Returns `None` unless the input is exactly 32 hex-encoded bytes.
    pub fn from_hex(s: &str) -> Option<Self> {
        let raw = hex::decode(s).ok()?;
        let bytes: [u8; KEY_LEN] = raw.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }

    /// Hex form for handing to the caller's persistence layer.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0[..])
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key material stays out of logs and panic messages.
        f.write_str("SymmetricKey(..)")
    }
}

/// Encrypt plaintext, returning `nonce || ciphertext+tag`.
pub fn encrypt(plaintext: &[u8], key: &SymmetricKey) -> Vec<u8> {
    use rand::RngCore;

    let cipher = Aes256GcmSiv::new_from_slice(key.as_bytes()).expect("valid key length");
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .expect("AES-GCM-SIV encrypt should not fail");

    let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    out.extend_from_slice(&nonce_bytes);
    out.extend_from_slice(&ciphertext);
    out
}

/// Decrypt `nonce || ciphertext+tag` produced by [`encrypt`].
///
/// # Errors
/// [`StegoError::DecryptionFailed`] if the input is too short for a nonce
/// and tag, the key is wrong, or the data was tampered with.
pub fn decrypt(data: &[u8], key: &SymmetricKey) -> Result<Vec<u8>, StegoError> {
    if data.len() < NONCE_LEN + TAG_LEN {
        return Err(StegoError::DecryptionFailed);
    }
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);

    let cipher = Aes256GcmSiv::new_from_slice(key.as_bytes()).expect("valid key length");
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| StegoError::DecryptionFailed)
}
