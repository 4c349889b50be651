//! WAV format chunk structures and parsing

use crate::error::{Error, Result};
use crate::util::{ByteOrder, SampleFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum `fmt ` payload holding every field up to bits-per-sample
pub const MIN_FMT_CHUNK_SIZE: usize = 16;

/// WAV format tag identifying the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatTag {
    /// PCM (uncompressed)
    Pcm,
    /// IEEE Float
    IeeeFloat,
    /// A-Law
    ALaw,
    /// Mu-Law
    MuLaw,
    /// Extensible format
    Extensible,
    /// Any other code, kept verbatim
    Unknown(u16),
}

impl From<u16> for FormatTag {
    fn from(val: u16) -> Self {
        match val {
            0x0001 => FormatTag::Pcm,
            0x0003 => FormatTag::IeeeFloat,
            0x0006 => FormatTag::ALaw,
            0x0007 => FormatTag::MuLaw,
            0xFFFE => FormatTag::Extensible,
            other => FormatTag::Unknown(other),
        }
    }
}

impl From<FormatTag> for u16 {
    fn from(tag: FormatTag) -> Self {
        match tag {
            FormatTag::Pcm => 0x0001,
            FormatTag::IeeeFloat => 0x0003,
            FormatTag::ALaw => 0x0006,
            FormatTag::MuLaw => 0x0007,
            FormatTag::Extensible => 0xFFFE,
            FormatTag::Unknown(val) => val,
        }
    }
}

impl Default for FormatTag {
    fn default() -> Self {
        FormatTag::Unknown(0)
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatTag::Pcm => write!(f, "pcm"),
            FormatTag::IeeeFloat => write!(f, "ieee_float"),
            FormatTag::ALaw => write!(f, "alaw"),
            FormatTag::MuLaw => write!(f, "mulaw"),
            FormatTag::Extensible => write!(f, "extensible"),
            FormatTag::Unknown(code) => write!(f, "unknown(0x{:04x})", code),
        }
    }
}

/// Format descriptor of a WAVE file
///
/// This is what audio-object collaborators receive alongside the sample data.
/// Byte rate and block align are derived rather than read from the chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WavFormat {
    /// Format tag (codec ID)
    pub format_tag: FormatTag,
    /// Number of channels (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Whether integer samples are two's complement (false = offset binary)
    pub signed: bool,
    /// Byte order of multi-byte samples
    pub byte_order: ByteOrder,
}

impl WavFormat {
    /// Create a descriptor with the conventional WAVE signedness
    /// (8-bit unsigned, wider depths signed) and little-endian samples
    pub fn new(format_tag: FormatTag, channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        WavFormat {
            format_tag,
            channels,
            sample_rate,
            bits_per_sample,
            signed: bits_per_sample > 8,
            byte_order: ByteOrder::LittleEndian,
        }
    }

    /// Parse the fields of a `fmt ` chunk payload
    ///
    /// `signed` is left unset; the container parser derives it once the
    /// whole chunk list has been scanned.
    pub fn from_fmt_chunk(data: &[u8], byte_order: ByteOrder) -> Result<Self> {
        if data.len() < MIN_FMT_CHUNK_SIZE {
            return Err(Error::format(format!(
                "WAV format chunk too small: {} bytes",
                data.len()
            )));
        }

        Ok(WavFormat {
            format_tag: byte_order.read_u16(&data[0..2]).into(),
            channels: byte_order.read_u16(&data[2..4]),
            sample_rate: byte_order.read_u32(&data[4..8]),
            bits_per_sample: byte_order.read_u16(&data[14..16]),
            signed: false,
            byte_order,
        })
    }

    /// Bytes per single-channel sample (the decode stride)
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }

    /// Bytes per frame (one sample for every channel)
    pub fn block_align(&self) -> usize {
        self.bytes_per_sample() * usize::from(self.channels)
    }

    /// Average bytes per second
    pub fn byte_rate(&self) -> u64 {
        u64::from(self.sample_rate) * self.block_align() as u64
    }

    /// Get the sample format this descriptor names, for display
    ///
    /// Never fails; combinations without a decode path report `Unknown`.
    pub fn sample_format(&self) -> SampleFormat {
        match (self.format_tag, self.bits_per_sample) {
            (FormatTag::Pcm, 8) => SampleFormat::U8,
            (FormatTag::Pcm, 16) => SampleFormat::I16,
            (FormatTag::Pcm, 24) => SampleFormat::I24,
            (FormatTag::Pcm, 32) => SampleFormat::I32,
            (FormatTag::IeeeFloat | FormatTag::Extensible, 32) => SampleFormat::F32,
            (FormatTag::IeeeFloat | FormatTag::Extensible, 64) => SampleFormat::F64,
            _ => SampleFormat::Unknown,
        }
    }

    /// Resolve the sample format the decoder will use
    ///
    /// Extensible is read as 32-bit float: some transcoders write float data
    /// under that tag. Every other combination without a decode path is
    /// `Error::Unsupported`.
    pub fn decodable_format(&self) -> Result<SampleFormat> {
        if self.byte_order != ByteOrder::LittleEndian {
            return Err(Error::unsupported(format!(
                "{} byte order for {} data",
                self.byte_order, self.format_tag
            )));
        }

        match (self.format_tag, self.bits_per_sample, self.signed) {
            (FormatTag::IeeeFloat | FormatTag::Extensible, 32, _) => Ok(SampleFormat::F32),
            (FormatTag::IeeeFloat | FormatTag::Extensible, bits, _) => Err(Error::unsupported(
                format!("{}-bit float samples", bits),
            )),
            (FormatTag::Pcm, 8, false) => Ok(SampleFormat::U8),
            (FormatTag::Pcm, 16, true) => Ok(SampleFormat::I16),
            (FormatTag::Pcm, 24, true) => Ok(SampleFormat::I24),
            (FormatTag::Pcm, 32, true) => Ok(SampleFormat::I32),
            (FormatTag::Pcm, bits, signed) => Err(Error::unsupported(format!(
                "{}-bit {} PCM",
                bits,
                if signed { "signed" } else { "unsigned" }
            ))),
            (tag, _, _) => Err(Error::unsupported(format!("WAV format {}", tag))),
        }
    }
}
