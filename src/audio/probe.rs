// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Carrier format detection and validation.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::audio::error::AudioError;

/// Supported lossless container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Wav,
    Flac,
}

impl ContainerKind {
    /// Detect the container kind from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "wav" => Some(Self::Wav),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }
}

/// Validated metadata for a carrier audio file.
///
/// The field set is closed: every field is populated by [`probe`] or the
/// probe fails with a typed [`AudioError`]. `bit_depth` is always 16 — WAV
/// carriers are rejected otherwise, FLAC carriers are rescaled to 16-bit at
/// the PCM bridge.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    pub path: PathBuf,
    pub kind: ContainerKind,
    pub sample_rate: u32,
    pub channels: u16,
    pub bit_depth: u16,
    pub duration_seconds: f64,
    pub size_bytes: u64,
}

impl AudioAsset {
    /// Total interleaved sample count implied by the stream metadata.
    pub fn total_samples(&self) -> u64 {
        (self.sample_rate as f64 * self.duration_seconds * self.channels as f64) as u64
    }
}

/// Identify and validate a carrier file, returning its typed metadata.
///
/// # Errors
/// - [`AudioError::Unsupported`] if the extension is not `.wav` or `.flac`.
/// - [`AudioError::Unreadable`] if the file is missing or cannot be read.
/// - [`AudioError::InvalidBitDepth`] if a WAV's samples are not 16-bit PCM.
/// - [`AudioError::Malformed`] if the container fails to parse.
pub fn probe(path: &Path) -> Result<AudioAsset, AudioError> {
    let kind = ContainerKind::from_path(path).ok_or_else(|| {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        AudioError::Unsupported(ext)
    })?;
    let size_bytes = fs::metadata(path).map_err(AudioError::Unreadable)?.len();

    let asset = match kind {
        ContainerKind::Wav => probe_wav(path, size_bytes)?,
        ContainerKind::Flac => probe_flac(path, size_bytes)?,
    };
    debug!(
        "probed {}: {:?}, {} Hz, {} ch, {:.2}s",
        path.display(),
        asset.kind,
        asset.sample_rate,
        asset.channels,
        asset.duration_seconds
    );
    Ok(asset)
}

fn probe_wav(path: &Path, size_bytes: u64) -> Result<AudioAsset, AudioError> {
    let reader = hound::WavReader::open(path).map_err(super::hound_read_error)?;
    let spec = reader.spec();
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        return Err(AudioError::InvalidBitDepth(spec.bits_per_sample));
    }
    // duration() is in inter-channel frames.
    let duration_seconds = reader.duration() as f64 / spec.sample_rate as f64;
    Ok(AudioAsset {
        path: path.to_path_buf(),
        kind: ContainerKind::Wav,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bit_depth: 16,
        duration_seconds,
        size_bytes,
    })
}

fn probe_flac(path: &Path, size_bytes: u64) -> Result<AudioAsset, AudioError> {
    let reader = claxon::FlacReader::open(path).map_err(super::claxon_read_error)?;
    let info = reader.streaminfo();
    let duration_seconds = match info.samples {
        Some(frames) => frames as f64 / info.sample_rate as f64,
        None => 0.0,
    };
    Ok(AudioAsset {
        path: path.to_path_buf(),
        kind: ContainerKind::Flac,
        sample_rate: info.sample_rate,
        channels: info.channels as u16,
        // Source depth may differ; the PCM bridge rescales to 16-bit.
        bit_depth: 16,
        duration_seconds,
        size_bytes,
    })
}
