//! Decoded WAVE file: format descriptor plus raw `data` payload

use super::header::WavFormat;
use crate::codec::pcm;
use crate::error::Result;
use bytes::Bytes;

/// An immutable, fully-buffered WAVE file
///
/// Holds only the `data` chunk payload; header bytes are discarded. The
/// payload is never mutated after construction, so a `WaveFile` can be shared
/// and decoded from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveFile {
    format: WavFormat,
    data: Bytes,
}

impl WaveFile {
    /// Build a file from a descriptor and sample payload
    pub fn from_parts(format: WavFormat, data: impl Into<Bytes>) -> Self {
        WaveFile {
            format,
            data: data.into(),
        }
    }

    /// Format descriptor
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// Raw sample bytes of the `data` chunk
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared handle to the sample bytes (reference counted, no copy)
    pub fn data_bytes(&self) -> Bytes {
        self.data.clone()
    }

    /// Number of samples per channel: `data.len() / (bytes_per_sample * channels)`
    ///
    /// Trailing bytes that do not fill a whole frame are ignored. Zero when the
    /// descriptor has no channels or a sub-byte depth.
    pub fn sample_count(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            frame => self.data.len() / frame,
        }
    }

    /// Total number of interleaved samples across all channels
    pub fn total_samples(&self) -> usize {
        self.sample_count() * usize::from(self.format.channels)
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count() as f64 / f64::from(self.format.sample_rate)
    }

    /// Decode to interleaved normalized float samples
    pub fn to_float_samples(&self) -> Result<Vec<f32>> {
        pcm::to_float_samples(self)
    }

    /// Decode to one normalized float buffer per channel
    pub fn to_planar_samples(&self) -> Result<Vec<Vec<f32>>> {
        pcm::to_planar_samples(self)
    }
}
