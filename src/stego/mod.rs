// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Steganographic encoding and decoding.
//!
//! The layer above the audio container codec. A payload travels through
//! four stages on its way into a carrier:
//!
//! 1. **Envelope** (`envelope`): AES-256-GCM-SIV encryption under a fresh
//!    per-operation key, wrapped with a recipient identity tag and its
//!    truncated SHA-256 hash.
//! 2. **Capacity** (`capacity`): feasibility check against the carrier's
//!    stream metadata — one payload bit per sample, 32 samples reserved for
//!    the length header.
//! 3. **Frame** (`frame`): 32-bit big-endian length prefix, MSB-first bit
//!    expansion.
//! 4. **LSB engine** (`lsb`): sign-safe embedding into bit 0 of each 16-bit
//!    sample.
//!
//! `pipeline` sequences these into the two public operations, [`encode`]
//! and [`decode`].

pub mod capacity;
pub mod crypto;
pub mod envelope;
pub mod error;
pub mod frame;
pub mod lsb;
mod pipeline;

pub use error::StegoError;
pub use pipeline::{decode, encode, DecodedPayload, PayloadKind, MAX_MESSAGE_CHARS};
