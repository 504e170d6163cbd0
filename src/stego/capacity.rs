// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/murmurcore

//! Carrier capacity estimation.
//!
//! One payload bit fits per carrier sample, with the first 32 samples
//! reserved for the frame length header. The estimate works on the probed
//! stream metadata alone, so callers can run it as a pre-flight feasibility
//! query before any sample is decoded or modified.

use crate::stego::frame::LENGTH_BITS;

/// Feasibility report for embedding a payload of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityReport {
    /// Embeddable bits: total samples minus the length header.
    /// Negative when the carrier is shorter than the header itself.
    pub available_bits: i64,
    /// Bits the payload needs (`payload_len * 8`).
    pub required_bits: u64,
    /// Whether the payload fits.
    pub can_hold: bool,
    /// `required_bits / available_bits * 100`; 0 when nothing is available.
    pub percentage: f64,
}

/// Estimate whether a `payload_len`-byte payload fits in a carrier with the
/// given stream parameters.
pub fn estimate_capacity(
    sample_rate: u32,
    channels: u16,
    duration_seconds: f64,
    payload_len: usize,
) -> CapacityReport {
    let total_samples = (sample_rate as f64 * duration_seconds * channels as f64) as i64;
    let available_bits = total_samples - LENGTH_BITS as i64;
    let required_bits = payload_len as u64 * 8;
    let can_hold = available_bits >= 0 && available_bits as u64 >= required_bits;
    let percentage = if available_bits > 0 {
        required_bits as f64 / available_bits as f64 * 100.0
    } else {
        0.0
    };
    CapacityReport {
        available_bits,
        required_bits,
        can_hold,
        percentage,
    }
}

/// Minutes of additional audio needed to carry `payload_len` bytes at
/// `sample_rate` — the figure a capacity error reports to the user.
pub fn extra_minutes_needed(payload_len: usize, sample_rate: u32) -> f64 {
    let samples_needed = payload_len as f64 * 8.0;
    samples_needed / sample_rate as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_is_total_minus_header() {
        // 44100 Hz, mono, 5 s: 220,500 samples.
        let report = estimate_capacity(44_100, 1, 5.0, 11);
        assert_eq!(report.available_bits, 220_468);
        assert_eq!(report.required_bits, 88);
        assert!(report.can_hold);
    }

    #[test]
    fn can_hold_boundary_is_exact() {
        // 8032 samples: room for exactly 1000 payload bytes.
        let report = estimate_capacity(8_032, 1, 1.0, 1000);
        assert_eq!(report.available_bits, 8_000);
        assert!(report.can_hold);
        assert!((report.percentage - 100.0).abs() < 1e-9);

        let report = estimate_capacity(8_032, 1, 1.0, 1001);
        assert!(!report.can_hold);
    }

    #[test]
    fn channels_multiply_capacity() {
        let mono = estimate_capacity(8_000, 1, 1.0, 0);
        let stereo = estimate_capacity(8_000, 2, 1.0, 0);
        assert_eq!(mono.available_bits, 7_968);
        assert_eq!(stereo.available_bits, 15_968);
    }

    #[test]
    fn degenerate_carrier_reports_zero_percentage() {
        let report = estimate_capacity(8_000, 1, 0.0, 100);
        assert!(report.available_bits < 0);
        assert!(!report.can_hold);
        assert_eq!(report.percentage, 0.0);
    }

    #[test]
    fn extra_minutes_formula() {
        // 330,750 bytes * 8 bits = 2,646,000 samples at 44.1 kHz = 60 s.
        let minutes = extra_minutes_needed(330_750, 44_100);
        assert!((minutes - 1.0).abs() < 1e-9);
    }
}
