// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Error types for the steganography pipeline.
//!
//! [`StegoError`] covers all failure modes from carrier probing through
//! frame extraction, identity verification, and decryption. Every variant is
//! terminal: these are deterministic validation, format, or crypto failures,
//! never transient conditions worth retrying.

use core::fmt;

use crate::audio::AudioError;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier could not be probed, read, or rewritten.
    Audio(AudioError),
    /// A text message exceeds the 255-character limit.
    MessageTooLong(usize),
    /// A text payload (on encode) or decoded message (on decode) is not
    /// valid UTF-8.
    InvalidUtf8,
    /// The payload does not fit in the carrier. `extra_minutes` estimates
    /// how much additional audio would be needed (0 when the sample rate is
    /// unknown at the failing layer).
    Capacity {
        required_bits: u64,
        available_bits: i64,
        extra_minutes: f64,
    },
    /// The extracted length header is zero or exceeds the 10 MB ceiling —
    /// the carrier was never encoded by this scheme, or was transcoded
    /// lossily.
    InvalidFrame(u32),
    /// The carrier has fewer samples than the declared frame requires.
    TruncatedFrame {
        needed_samples: u64,
        available_samples: u64,
    },
    /// The embedded envelope does not start with the `EMAIL:` prefix.
    MissingEmailPrefix,
    /// The envelope's tag or hash field is malformed.
    EnvelopeCorrupted,
    /// The stored identity hash does not match the recomputed one
    /// (corrupted or foreign data).
    HashMismatch,
    /// The payload is bound to a recipient other than the current identity.
    RecipientMismatch,
    /// AES-GCM-SIV decryption failed (wrong key or corrupted data).
    DecryptionFailed,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio(e) => write!(f, "audio container error: {e}"),
            Self::MessageTooLong(n) => write!(f, "message too long ({n} characters, max 255)"),
            Self::InvalidUtf8 => write!(f, "payload text is not valid UTF-8"),
            Self::Capacity {
                required_bits,
                available_bits,
                extra_minutes,
            } => write!(
                f,
                "audio file too small: need {required_bits} bits, have {available_bits} \
                 (about {extra_minutes:.1} more minutes of audio needed)"
            ),
            Self::InvalidFrame(len) => write!(f, "invalid embedded data length: {len}"),
            Self::TruncatedFrame {
                needed_samples,
                available_samples,
            } => write!(
                f,
                "audio too small for declared data: need {needed_samples} samples, \
                 have {available_samples}"
            ),
            Self::MissingEmailPrefix => write!(f, "embedded data is missing the recipient prefix"),
            Self::EnvelopeCorrupted => write!(f, "embedded envelope is malformed"),
            Self::HashMismatch => write!(f, "recipient hash mismatch (corrupted or foreign data)"),
            Self::RecipientMismatch => {
                write!(f, "recipient does not match the current identity")
            }
            Self::DecryptionFailed => write!(f, "decryption failed (wrong key or corrupted data)"),
        }
    }
}

impl std::error::Error for StegoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Audio(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AudioError> for StegoError {
    fn from(e: AudioError) -> Self {
        Self::Audio(e)
    }
}
