//! WAVE file probing
//!
//! Builds a printable / serializable report from a parsed [`WaveFile`], in the
//! spirit of FFprobe's output. Used by the `zwav-probe` binary.

use crate::error::Result;
use crate::format::wav::{WavFormat, WaveFile};
use crate::util::SampleFormat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-channel level statistics over decoded samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Largest absolute sample value
    pub peak: f32,
    /// Root mean square level
    pub rms: f32,
}

impl ChannelStats {
    /// Compute statistics for one channel's samples
    pub fn from_samples(samples: &[f32]) -> Self {
        if samples.is_empty() {
            return ChannelStats { peak: 0.0, rms: 0.0 };
        }

        let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        let sum_sq: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
        let rms = (sum_sq / samples.len() as f64).sqrt() as f32;

        ChannelStats { peak, rms }
    }
}

/// Report describing one WAVE file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveReport {
    /// File path
    pub file_path: String,
    /// File size in bytes
    pub file_size: u64,
    /// Format descriptor
    pub format: WavFormat,
    /// Resolved sample format
    pub sample_format: SampleFormat,
    /// Whether the sample data can be decoded to floats
    pub decodable: bool,
    /// Size of the `data` payload in bytes
    pub data_size: usize,
    /// Samples per channel
    pub sample_count: usize,
    /// Duration in seconds
    pub duration: f64,
    /// Per-channel levels, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_stats: Option<Vec<ChannelStats>>,
}

impl WaveReport {
    /// Build a report for a parsed file
    pub fn new(file_path: impl Into<String>, file_size: u64, wave: &WaveFile) -> Self {
        let format = *wave.format();

        WaveReport {
            file_path: file_path.into(),
            file_size,
            format,
            sample_format: format.sample_format(),
            decodable: format.decodable_format().is_ok() && format.channels > 0,
            data_size: wave.data().len(),
            sample_count: wave.sample_count(),
            duration: wave.duration_seconds(),
            channel_stats: None,
        }
    }

    /// Decode the samples and attach per-channel levels
    pub fn with_channel_stats(mut self, wave: &WaveFile) -> Result<Self> {
        let planes = wave.to_planar_samples()?;
        self.channel_stats = Some(planes.iter().map(|p| ChannelStats::from_samples(p)).collect());
        Ok(self)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to compact JSON string
    pub fn to_json_compact(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for WaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input #0, wav from '{}':", self.file_path)?;
        writeln!(f, "  File Size: {} bytes", self.file_size)?;

        let hours = (self.duration / 3600.0) as u32;
        let minutes = ((self.duration % 3600.0) / 60.0) as u32;
        let seconds = self.duration % 60.0;
        writeln!(f, "  Duration: {:02}:{:02}:{:05.2}", hours, minutes, seconds)?;

        write!(
            f,
            "  Audio: {}, {} Hz, {} channels, {} ({}-bit, {}, {})",
            self.format.format_tag,
            self.format.sample_rate,
            self.format.channels,
            self.sample_format,
            self.format.bits_per_sample,
            if self.format.signed { "signed" } else { "unsigned" },
            self.format.byte_order
        )?;
        if !self.decodable {
            write!(f, " [not decodable]")?;
        }
        writeln!(f)?;

        writeln!(f, "  Data: {} bytes, {} samples per channel", self.data_size, self.sample_count)?;

        if let Some(stats) = &self.channel_stats {
            for (index, channel) in stats.iter().enumerate() {
                writeln!(
                    f,
                    "  Channel #{}: peak {:.4}, rms {:.4}",
                    index, channel.peak, channel.rms
                )?;
            }
        }

        Ok(())
    }
}
