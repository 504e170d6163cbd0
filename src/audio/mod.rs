// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Audio container layer: format probing and PCM bridging.
//!
//! Handles the two supported lossless carriers:
//!
//! - **WAV** (RIFF/WAVE): accepted only as 16-bit integer PCM; samples pass
//!   through the bridge verbatim.
//! - **FLAC**: any bit depth on read, rescaled to 16-bit signed PCM;
//!   output is always written at 16 bits per sample.
//!
//! The steganography layer above operates purely on the flat interleaved
//! `Vec<i16>` buffers produced here and never touches container bytes.

pub mod error;
pub mod pcm;
pub mod probe;

pub use error::AudioError;
pub use pcm::{from_pcm, to_pcm};
pub use probe::{probe, AudioAsset, ContainerKind};

/// Map a hound error from the read path.
pub(crate) fn hound_read_error(e: hound::Error) -> AudioError {
    match e {
        hound::Error::IoError(io) => AudioError::Unreadable(io),
        other => AudioError::Malformed(other.to_string()),
    }
}

/// Map a hound error from the write path.
pub(crate) fn hound_write_error(e: hound::Error) -> AudioError {
    match e {
        hound::Error::IoError(io) => AudioError::Io(io),
        other => AudioError::Encode(other.to_string()),
    }
}

/// Map a claxon error from the read path.
pub(crate) fn claxon_read_error(e: claxon::Error) -> AudioError {
    match e {
        claxon::Error::IoError(io) => AudioError::Unreadable(io),
        other => AudioError::Malformed(other.to_string()),
    }
}
