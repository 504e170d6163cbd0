// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! PCM bridging: container bytes to flat `i16` sample buffers and back.
//!
//! The bridge is lossless for files this crate wrote itself: a buffer
//! written by [`from_pcm`] reads back bit-identical through [`to_pcm`],
//! which is what keeps embedded LSB data intact across the round trip.
//!
//! Multi-channel audio is flattened to a single interleaved sequence
//! (`len == frames * channels`); the steganography layer treats every
//! channel sample as one carrier position.

use std::fs;
use std::path::Path;

use flacenc::component::BitRepr;
use flacenc::error::Verify;

use crate::audio::error::AudioError;
use crate::audio::probe::{AudioAsset, ContainerKind};

/// Decode a probed carrier into interleaved signed 16-bit samples.
///
/// WAV frames are read verbatim. FLAC samples are rescaled from the source
/// bit depth to 16-bit by arithmetic shift.
///
/// # Errors
/// [`AudioError::Unreadable`] on I/O failure, [`AudioError::Malformed`] if
/// the container data is corrupt.
pub fn to_pcm(asset: &AudioAsset) -> Result<Vec<i16>, AudioError> {
    match asset.kind {
        ContainerKind::Wav => read_wav(&asset.path),
        ContainerKind::Flac => read_flac(&asset.path),
    }
}

fn read_wav(path: &Path) -> Result<Vec<i16>, AudioError> {
    let mut reader = hound::WavReader::open(path).map_err(super::hound_read_error)?;
    reader
        .samples::<i16>()
        .collect::<Result<Vec<i16>, hound::Error>>()
        .map_err(super::hound_read_error)
}

fn read_flac(path: &Path) -> Result<Vec<i16>, AudioError> {
    let mut reader = claxon::FlacReader::open(path).map_err(super::claxon_read_error)?;
    let info = reader.streaminfo();
    let bits = info.bits_per_sample;
    let capacity = info.samples.unwrap_or(0) as usize * info.channels as usize;

    let mut samples = Vec::with_capacity(capacity);
    for sample in reader.samples() {
        let sample = sample.map_err(super::claxon_read_error)?;
        samples.push(rescale_to_16(sample, bits));
    }
    Ok(samples)
}

/// Rescale a decoded FLAC sample from its source bit depth to 16-bit.
fn rescale_to_16(sample: i32, bits_per_sample: u32) -> i16 {
    if bits_per_sample > 16 {
        (sample >> (bits_per_sample - 16)) as i16
    } else if bits_per_sample < 16 {
        (sample << (16 - bits_per_sample)) as i16
    } else {
        sample as i16
    }
}

/// Write samples into a new container of the same kind and stream metadata
/// as `asset`.
///
/// The destination's parent directory is created first; if that fails, no
/// file is written at all.
///
/// # Errors
/// [`AudioError::Io`] on filesystem failure, [`AudioError::Encode`] if the
/// container encoder rejects the stream.
pub fn from_pcm(samples: &[i16], dest: &Path, asset: &AudioAsset) -> Result<(), AudioError> {
    if let Some(dir) = dest.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(AudioError::Io)?;
        }
    }
    match asset.kind {
        ContainerKind::Wav => write_wav(samples, dest, asset),
        ContainerKind::Flac => write_flac(samples, dest, asset),
    }
}

fn write_wav(samples: &[i16], dest: &Path, asset: &AudioAsset) -> Result<(), AudioError> {
    let spec = hound::WavSpec {
        channels: asset.channels,
        sample_rate: asset.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(dest, spec).map_err(super::hound_write_error)?;
    for &sample in samples {
        writer.write_sample(sample).map_err(super::hound_write_error)?;
    }
    writer.finalize().map_err(super::hound_write_error)
}

fn write_flac(samples: &[i16], dest: &Path, asset: &AudioAsset) -> Result<(), AudioError> {
    let widened: Vec<i32> = samples.iter().map(|&s| s as i32).collect();

    let config = flacenc::config::Encoder::default()
        .into_verified()
        .expect("default FLAC encoder config is valid");
    let source = flacenc::source::MemSource::from_samples(
        &widened,
        asset.channels as usize,
        16,
        asset.sample_rate as usize,
    );
    let stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
        .map_err(|e| AudioError::Encode(format!("{e:?}")))?;

    let mut sink = flacenc::bitsink::ByteSink::new();
    stream
        .write(&mut sink)
        .map_err(|e| AudioError::Encode(format!("{e:?}")))?;
    fs::write(dest, sink.as_slice()).map_err(AudioError::Io)
}
