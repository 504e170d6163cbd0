// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! # murmur-core
//!
//! Pure-Rust audio steganography engine for hiding encrypted payloads in
//! lossless audio. A payload (text message, image, or document) is sealed
//! with AES-256-GCM-SIV under a fresh per-operation key, bound to a
//! recipient identity via a truncated SHA-256 tag, and embedded one bit per
//! sample into the least-significant bits of 16-bit PCM samples.
//!
//! Supported carriers are 16-bit PCM WAV and FLAC (any FLAC bit depth on
//! read, normalized to 16-bit PCM on both read and write). The audio
//! container codec lives in the `audio` module; the steganography layer
//! (framing, capacity planning, encryption, identity binding, pipeline)
//! lives in the `stego` module.
//!
//! All processing is in-memory and synchronous. The crate reads no
//! environment or configuration; callers supply every path, key, and
//! identity string as explicit arguments.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use murmur_core::{encode, decode, PayloadKind};
//!
//! let key = encode(
//!     "voice_memo.wav".as_ref(),
//!     b"meet at dawn",
//!     PayloadKind::Message,
//!     "out/voice_memo_stego.wav".as_ref(),
//!     Some("a@b.com"),
//! )?;
//!
//! // Later, as the intended recipient:
//! let recovered = decode(
//!     "out/voice_memo_stego.wav".as_ref(),
//!     &key,
//!     PayloadKind::Message,
//!     Some("a@b.com"),
//! )?;
//! ```

pub mod audio;
pub mod stego;

pub use audio::error::AudioError;
pub use audio::pcm::{from_pcm, to_pcm};
pub use audio::probe::{probe, AudioAsset, ContainerKind};
pub use stego::capacity::{estimate_capacity, CapacityReport};
pub use stego::crypto::SymmetricKey;
pub use stego::{decode, encode, DecodedPayload, PayloadKind, StegoError, MAX_MESSAGE_CHARS};
