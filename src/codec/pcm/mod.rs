//! PCM (Pulse Code Modulation) sample decoding
//!
//! Converts the raw `data` payload of a [`WaveFile`] into normalized `f32`
//! samples. Integer formats are divided by their positive maximum, so the
//! most negative value lands slightly below -1.0; 8-bit samples are offset
//! binary centred on 128. 32-bit float samples pass through untouched.

pub mod decoder;

pub use decoder::PcmDecoder;

use crate::error::{Error, Result};
use crate::format::wav::{WavFormat, WaveFile};
use crate::util::{ByteOrder, SampleFormat};

/// PCM decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmConfig {
    /// Sample format
    pub sample_format: SampleFormat,
    /// Number of channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Byte order of multi-byte samples
    pub byte_order: ByteOrder,
}

impl PcmConfig {
    /// Create a new little-endian PCM configuration
    pub fn new(sample_format: SampleFormat, channels: u16, sample_rate: u32) -> Self {
        PcmConfig {
            sample_format,
            channels,
            sample_rate,
            byte_order: ByteOrder::LittleEndian,
        }
    }

    /// Build a configuration for a WAVE format descriptor
    ///
    /// Fails with `Error::Unsupported` when the descriptor has no decode path.
    pub fn from_format(format: &WavFormat) -> Result<Self> {
        let sample_format = format.decodable_format()?;

        if format.channels == 0 {
            return Err(Error::unsupported("WAV format with zero channels"));
        }

        Ok(PcmConfig {
            sample_format,
            channels: format.channels,
            sample_rate: format.sample_rate,
            byte_order: format.byte_order,
        })
    }

    /// Get bytes per sample for a single channel
    pub fn bytes_per_sample(&self) -> usize {
        self.sample_format.sample_size()
    }

    /// Get bytes per frame (all channels)
    pub fn bytes_per_frame(&self) -> usize {
        self.bytes_per_sample() * self.channels as usize
    }

    /// Calculate number of frames from byte count
    pub fn samples_from_bytes(&self, bytes: usize) -> usize {
        match self.bytes_per_frame() {
            0 => 0,
            frame => bytes / frame,
        }
    }
}

/// Decode a WAVE file to interleaved normalized float samples
pub fn to_float_samples(wave: &WaveFile) -> Result<Vec<f32>> {
    let config = PcmConfig::from_format(wave.format())?;
    PcmDecoder::new(config).decode(wave.data())
}

/// Decode a WAVE file to one normalized float buffer per channel
pub fn to_planar_samples(wave: &WaveFile) -> Result<Vec<Vec<f32>>> {
    let config = PcmConfig::from_format(wave.format())?;
    PcmDecoder::new(config).decode_planar(wave.data())
}
