//! Audio sample format definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interleaved audio sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleFormat {
    /// Unsigned 8-bit (offset binary)
    U8,
    /// Signed 16-bit
    I16,
    /// Signed 24-bit, packed in 3 bytes
    I24,
    /// Signed 32-bit
    I32,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
    /// Unknown format
    #[default]
    Unknown,
}

impl SampleFormat {
    /// Get the size in bytes of one sample
    pub fn sample_size(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::I16 => 2,
            SampleFormat::I24 => 3,
            SampleFormat::I32 | SampleFormat::F32 => 4,
            SampleFormat::F64 => 8,
            SampleFormat::Unknown => 0,
        }
    }

    /// Check if this is a floating point format
    pub fn is_float(&self) -> bool {
        matches!(self, SampleFormat::F32 | SampleFormat::F64)
    }

    /// Check if samples carry a sign (two's complement or float)
    pub fn is_signed(&self) -> bool {
        !matches!(self, SampleFormat::U8 | SampleFormat::Unknown)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleFormat::U8 => "u8",
            SampleFormat::I16 => "s16",
            SampleFormat::I24 => "s24",
            SampleFormat::I32 => "s32",
            SampleFormat::F32 => "f32",
            SampleFormat::F64 => "f64",
            SampleFormat::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}
