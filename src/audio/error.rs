// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Error types for audio container probing and PCM bridging.

use std::fmt;
use std::io;

/// Errors that can occur while probing, reading, or writing audio containers.
#[derive(Debug)]
pub enum AudioError {
    /// The file extension is neither `.wav` nor `.flac`.
    Unsupported(String),
    /// The carrier file could not be opened or read.
    Unreadable(io::Error),
    /// A WAV carrier whose samples are not 16-bit integer PCM.
    InvalidBitDepth(u16),
    /// The container data is corrupt or violates its format.
    Malformed(String),
    /// Re-encoding the sample data into the output container failed.
    Encode(String),
    /// Filesystem failure while creating or writing the output file.
    Io(io::Error),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(ext) => {
                write!(f, "unsupported format: {ext:?} (only WAV and FLAC supported)")
            }
            Self::Unreadable(e) => write!(f, "cannot read audio file: {e}"),
            Self::InvalidBitDepth(bits) => {
                write!(f, "WAV file must be 16-bit PCM (found {bits}-bit)")
            }
            Self::Malformed(msg) => write!(f, "malformed audio container: {msg}"),
            Self::Encode(msg) => write!(f, "audio encoding failed: {msg}"),
            Self::Io(e) => write!(f, "cannot write output file: {e}"),
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable(e) | Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AudioError>;
