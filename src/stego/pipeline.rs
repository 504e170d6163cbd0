// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Encode/decode pipeline.
//!
//! Sequences probing, envelope sealing, capacity planning, PCM bridging,
//! and LSB embedding into the two public operations:
//!
//! 1. `encode`: probe → validate payload → seal → capacity check →
//!    to_pcm → frame → embed → from_pcm
//! 2. `decode`: probe → to_pcm → extract → unwrap → interpret
//!
//! Each call is atomic from the caller's perspective: the destination file
//! is written only after the full stego buffer exists in memory, so a
//! failure at any step leaves no partial output. Errors from the layers
//! below pass through unchanged — the pipeline never retries, never guesses
//! a payload kind, and never swallows a failure.

use std::path::Path;

use log::{debug, info};

use crate::audio::{pcm, probe};
use crate::stego::capacity;
use crate::stego::crypto::SymmetricKey;
use crate::stego::envelope;
use crate::stego::error::StegoError;
use crate::stego::frame::Frame;
use crate::stego::lsb;

/// Maximum length of a text message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 255;

/// What kind of payload is being hidden or recovered.
///
/// `Image` and `Document` are both opaque byte payloads; the distinction
/// exists for callers naming and persisting their output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Message,
    Image,
    Document,
}

impl PayloadKind {
    fn is_text(self) -> bool {
        matches!(self, Self::Message)
    }
}

/// A recovered payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    /// UTF-8 text recovered from a [`PayloadKind::Message`] payload.
    Message(String),
    /// Raw bytes recovered from an image or document payload; persisting
    /// them is the caller's concern.
    Bytes(Vec<u8>),
}

impl DecodedPayload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Message(s) => s.as_bytes(),
            Self::Bytes(b) => b,
        }
    }
}

/// Hide `payload` inside the audio file at `audio_path`, writing the stego
/// container to `dest` and binding the payload to `recipient`.
///
/// Returns the freshly generated symmetric key. The key is never persisted
/// here; the caller owns it and must supply it back to [`decode`].
///
/// # Errors
/// - [`StegoError::Audio`] if the carrier cannot be probed, read, or the
///   output cannot be written.
/// - [`StegoError::InvalidUtf8`] / [`StegoError::MessageTooLong`] for an
///   invalid `Message` payload.
/// - [`StegoError::Capacity`] if the sealed payload exceeds the carrier's
///   capacity; no sample is touched in that case.
pub fn encode(
    audio_path: &Path,
    payload: &[u8],
    kind: PayloadKind,
    dest: &Path,
    recipient: Option<&str>,
) -> Result<SymmetricKey, StegoError> {
    // 1. Probe and validate the carrier.
    let asset = probe::probe(audio_path)?;
    info!(
        "encoding {kind:?} payload ({} bytes) into {}",
        payload.len(),
        audio_path.display()
    );

    // 2. Validate the payload for its kind.
    if kind.is_text() {
        let text = std::str::from_utf8(payload).map_err(|_| StegoError::InvalidUtf8)?;
        let chars = text.chars().count();
        if chars > MAX_MESSAGE_CHARS {
            return Err(StegoError::MessageTooLong(chars));
        }
    }

    // 3. Fresh key; seal the payload.
    let key = SymmetricKey::generate();
    let sealed = envelope::wrap(payload, recipient, &key);
    debug!("sealed payload: {} bytes", sealed.len());

    // 4. Capacity check on the sealed size, before any PCM work.
    let report = capacity::estimate_capacity(
        asset.sample_rate,
        asset.channels,
        asset.duration_seconds,
        sealed.len(),
    );
    if !report.can_hold {
        return Err(StegoError::Capacity {
            required_bits: report.required_bits,
            available_bits: report.available_bits,
            extra_minutes: capacity::extra_minutes_needed(sealed.len(), asset.sample_rate),
        });
    }
    debug!("capacity: {:.1}% used", report.percentage);

    // 5. Bridge to PCM, embed, write the stego container.
    let samples = pcm::to_pcm(&asset)?;
    let frame = Frame::new(sealed)?;
    let stego = lsb::embed(&samples, &frame)?;
    pcm::from_pcm(&stego, dest, &asset)?;

    info!("encode complete: {}", dest.display());
    Ok(key)
}

/// Recover a payload hidden by [`encode`].
///
/// `current_identity` is the authenticated caller's email; it must match
/// the recipient the payload was bound to, unless the payload was encoded
/// without a recipient.
///
/// # Errors
/// - [`StegoError::Audio`] if the carrier cannot be probed or read.
/// - [`StegoError::InvalidFrame`] / [`StegoError::TruncatedFrame`] if the
///   carrier holds no valid frame.
/// - [`StegoError::MissingEmailPrefix`] / [`StegoError::EnvelopeCorrupted`] /
///   [`StegoError::HashMismatch`] / [`StegoError::RecipientMismatch`] for
///   envelope and identity failures.
/// - [`StegoError::DecryptionFailed`] for a wrong key or corrupt ciphertext.
/// - [`StegoError::InvalidUtf8`] if a `Message` payload is not valid UTF-8.
pub fn decode(
    audio_path: &Path,
    key: &SymmetricKey,
    expected_kind: PayloadKind,
    current_identity: Option<&str>,
) -> Result<DecodedPayload, StegoError> {
    // 1. Probe.
    let asset = probe::probe(audio_path)?;
    info!(
        "decoding {expected_kind:?} payload from {}",
        audio_path.display()
    );

    // 2. Bridge to PCM and extract the frame.
    let samples = pcm::to_pcm(&asset)?;
    let frame = lsb::extract(&samples)?;
    debug!("extracted frame: {} bytes", frame.payload().len());

    // 3. Verify the identity binding and decrypt.
    let raw = envelope::unwrap(frame.payload(), key, current_identity)?;

    // 4. Interpret per the expected kind.
    if expected_kind.is_text() {
        let message = String::from_utf8(raw).map_err(|_| StegoError::InvalidUtf8)?;
        info!("decode complete: {} character message", message.chars().count());
        Ok(DecodedPayload::Message(message))
    } else {
        info!("decode complete: {} bytes", raw.len());
        Ok(DecodedPayload::Bytes(raw))
    }
}
