//! Common test utilities for zwav integration tests
//!
//! Builders for synthetic RIFF/WAVE images and sample payloads.

#![allow(dead_code)]

use std::f32::consts::PI;

// ============================================================================
// Format codes
// ============================================================================

pub const TAG_PCM: u16 = 0x0001;
pub const TAG_IEEE_FLOAT: u16 = 0x0003;
pub const TAG_ALAW: u16 = 0x0006;
pub const TAG_MULAW: u16 = 0x0007;
pub const TAG_EXTENSIBLE: u16 = 0xFFFE;

// ============================================================================
// Chunk builders
// ============================================================================

/// Build a raw chunk: ID, little-endian length, payload (no padding)
pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + payload.len());
    bytes.extend_from_slice(id);
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

/// Build a standard 16-byte `fmt ` chunk
pub fn fmt_chunk(format_tag: u16, channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;

    let mut payload = Vec::with_capacity(16);
    payload.extend_from_slice(&format_tag.to_le_bytes());
    payload.extend_from_slice(&channels.to_le_bytes());
    payload.extend_from_slice(&sample_rate.to_le_bytes());
    payload.extend_from_slice(&byte_rate.to_le_bytes());
    payload.extend_from_slice(&block_align.to_le_bytes());
    payload.extend_from_slice(&bits_per_sample.to_le_bytes());
    chunk(b"fmt ", &payload)
}

/// Build a `data` chunk
pub fn data_chunk(payload: &[u8]) -> Vec<u8> {
    chunk(b"data", payload)
}

/// Wrap chunks in a RIFF/WAVE header with a correct declared size
pub fn riff_wave(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body: Vec<u8> = chunks.concat();
    let mut bytes = Vec::with_capacity(12 + body.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(&body);
    bytes
}

/// Build a minimal `fmt ` + `data` WAVE image
pub fn create_wav(
    format_tag: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    data: &[u8],
) -> Vec<u8> {
    riff_wave(&[
        fmt_chunk(format_tag, channels, sample_rate, bits_per_sample),
        data_chunk(data),
    ])
}

// ============================================================================
// Sample payloads
// ============================================================================

/// Little-endian bytes of 16-bit samples
pub fn i16_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Little-endian packed 3-byte samples (low 24 bits of each value)
pub fn i24_bytes(samples: &[i32]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| {
            let b = s.to_le_bytes();
            [b[0], b[1], b[2]]
        })
        .collect()
}

/// Little-endian bytes of 32-bit samples
pub fn i32_bytes(samples: &[i32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Little-endian bytes of 32-bit float samples
pub fn f32_bytes(samples: &[f32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Generate a 16-bit sine tone, interleaved across channels
pub fn create_sine_i16(sample_rate: u32, frequency: f32, frames: usize, channels: u16) -> Vec<i16> {
    let mut samples = Vec::with_capacity(frames * channels as usize);
    for i in 0..frames {
        let t = i as f32 / sample_rate as f32;
        let value = (0.5 * (2.0 * PI * frequency * t).sin() * 32767.0) as i16;
        for _ in 0..channels {
            samples.push(value);
        }
    }
    samples
}

/// Deterministic pseudo-random bytes (xorshift)
pub fn create_garbage_data(size: usize) -> Vec<u8> {
    let mut state: u32 = 0x1234_5678;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state & 0xFF) as u8
        })
        .collect()
}
