// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! LSB embedding and extraction on 16-bit PCM samples.
//!
//! Carrier samples are signed, but the bit surgery must touch only bit 0 of
//! the raw pattern. Both helpers therefore reinterpret the sample as `u16`,
//! operate on that, and reinterpret back. Arithmetic on the signed value
//! (incrementing or decrementing to flip the low bit) can overflow near the
//! i16 range limits and disturb the upper bits; the unsigned view cannot.

use crate::stego::error::StegoError;
use crate::stego::frame::{Frame, LENGTH_BITS, MAX_PAYLOAD_BYTES};

/// Set bit 0 of a sample's raw bit pattern, leaving bits 1-15 untouched.
#[inline]
pub fn set_lsb(sample: i16, bit: u8) -> i16 {
    ((sample as u16 & 0xFFFE) | (bit & 1) as u16) as i16
}

/// Read bit 0 of a sample's raw bit pattern.
#[inline]
pub fn lsb(sample: i16) -> u8 {
    (sample as u16 & 1) as u8
}

/// Embed a frame into the low-order bits of `samples`.
///
/// Frame bits are written in order, one per sample, starting at sample 0.
/// The input buffer is left unmodified; a new buffer is returned. If the
/// frame does not fit the call fails without touching anything — it never
/// truncates.
///
/// # Errors
/// [`StegoError::Capacity`] if the buffer has fewer samples than frame bits.
pub fn embed(samples: &[i16], frame: &Frame) -> Result<Vec<i16>, StegoError> {
    if samples.len() < frame.bit_len() {
        return Err(StegoError::Capacity {
            required_bits: frame.payload().len() as u64 * 8,
            available_bits: samples.len() as i64 - LENGTH_BITS as i64,
            extra_minutes: 0.0,
        });
    }

    let mut stego = samples.to_vec();
    for (i, bit) in frame.to_bits().into_iter().enumerate() {
        stego[i] = set_lsb(stego[i], bit);
    }
    Ok(stego)
}

/// Extract a frame from the low-order bits of `samples`.
///
/// Reads the 32-bit length header MSB first, validates it, then packs the
/// following `length*8` LSBs into payload bytes.
///
/// # Errors
/// - [`StegoError::InvalidFrame`] if the declared length is zero or exceeds
///   [`MAX_PAYLOAD_BYTES`].
/// - [`StegoError::TruncatedFrame`] if the buffer is shorter than the
///   declared frame.
pub fn extract(samples: &[i16]) -> Result<Frame, StegoError> {
    if samples.len() < LENGTH_BITS {
        return Err(StegoError::TruncatedFrame {
            needed_samples: LENGTH_BITS as u64,
            available_samples: samples.len() as u64,
        });
    }

    let mut declared: u32 = 0;
    for &sample in &samples[..LENGTH_BITS] {
        declared = (declared << 1) | lsb(sample) as u32;
    }
    if declared == 0 || declared > MAX_PAYLOAD_BYTES {
        return Err(StegoError::InvalidFrame(declared));
    }

    let needed = Frame::samples_needed(declared);
    if (samples.len() as u64) < needed {
        return Err(StegoError::TruncatedFrame {
            needed_samples: needed,
            available_samples: samples.len() as u64,
        });
    }

    let mut payload = Vec::with_capacity(declared as usize);
    let mut index = LENGTH_BITS;
    for _ in 0..declared {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | lsb(samples[index]);
            index += 1;
        }
        payload.push(byte);
    }
    Frame::new(payload)
}
