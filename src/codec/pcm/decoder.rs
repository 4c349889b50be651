//! PCM decoder implementation

use super::PcmConfig;
use crate::error::{Error, Result};
use crate::util::SampleFormat;
use tracing::debug;

const I16_SCALE: f32 = 32_767.0;
const I24_SCALE: f32 = 8_388_607.0;
const I32_SCALE: f64 = 2_147_483_647.0;
const U8_SCALE: f32 = 127.0;

/// PCM decoder producing normalized `f32` samples
#[derive(Debug, Clone)]
pub struct PcmDecoder {
    config: PcmConfig,
}

impl PcmDecoder {
    /// Create a new PCM decoder
    pub fn new(config: PcmConfig) -> Self {
        PcmDecoder { config }
    }

    /// Get the decoder configuration
    pub fn config(&self) -> &PcmConfig {
        &self.config
    }

    /// Decode interleaved sample bytes
    ///
    /// Only whole frames are decoded; a trailing partial frame is dropped.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<f32>> {
        let frames = self.config.samples_from_bytes(data.len());
        let data = &data[..frames * self.config.bytes_per_frame()];
        let order = self.config.byte_order;

        let samples: Vec<f32> = match self.config.sample_format {
            SampleFormat::U8 => data
                .iter()
                .map(|&b| (i16::from(b) - 128) as f32 / U8_SCALE)
                .collect(),
            SampleFormat::I16 => data
                .chunks_exact(2)
                .map(|c| f32::from(order.read_i16(c)) / I16_SCALE)
                .collect(),
            SampleFormat::I24 => data
                .chunks_exact(3)
                .map(|c| order.read_i24(c) as f32 / I24_SCALE)
                .collect(),
            SampleFormat::I32 => data
                .chunks_exact(4)
                .map(|c| (f64::from(order.read_i32(c)) / I32_SCALE) as f32)
                .collect(),
            SampleFormat::F32 => data.chunks_exact(4).map(|c| order.read_f32(c)).collect(),
            other => {
                return Err(Error::unsupported(format!(
                    "No decode path for {} samples",
                    other
                )))
            }
        };

        debug!(
            "Decoded {} {} samples ({} frames, {}ch)",
            samples.len(),
            self.config.sample_format,
            frames,
            self.config.channels
        );

        Ok(samples)
    }

    /// Decode sample bytes into one buffer per channel
    pub fn decode_planar(&self, data: &[u8]) -> Result<Vec<Vec<f32>>> {
        let channels = usize::from(self.config.channels);
        if channels == 0 {
            return Err(Error::unsupported("Planar decode with zero channels"));
        }

        let frames = self.config.samples_from_bytes(data.len());
        let interleaved = self.decode(data)?;

        let mut planes = vec![Vec::with_capacity(frames); channels];
        for frame in interleaved.chunks_exact(channels) {
            for (plane, &sample) in planes.iter_mut().zip(frame) {
                plane.push(sample);
            }
        }

        Ok(planes)
    }
}
