//! Byte order of multi-byte fields and samples

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte order used for every multi-byte read
///
/// WAVE data is little-endian in practice, so the parser always produces
/// `LittleEndian`. The order is still carried as data so that readers never
/// hard-code it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    LittleEndian,
    /// Most significant byte first
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from the first 2 bytes of `buf`
    pub fn read_u16(self, buf: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_u16(buf),
            ByteOrder::BigEndian => BigEndian::read_u16(buf),
        }
    }

    /// Read a u32 from the first 4 bytes of `buf`
    pub fn read_u32(self, buf: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_u32(buf),
            ByteOrder::BigEndian => BigEndian::read_u32(buf),
        }
    }

    /// Read a two's-complement i16 from the first 2 bytes of `buf`
    pub fn read_i16(self, buf: &[u8]) -> i16 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_i16(buf),
            ByteOrder::BigEndian => BigEndian::read_i16(buf),
        }
    }

    /// Read a two's-complement 24-bit integer from the first 3 bytes of `buf`,
    /// sign-extended from bit 23
    pub fn read_i24(self, buf: &[u8]) -> i32 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_i24(buf),
            ByteOrder::BigEndian => BigEndian::read_i24(buf),
        }
    }

    /// Read a two's-complement i32 from the first 4 bytes of `buf`
    pub fn read_i32(self, buf: &[u8]) -> i32 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_i32(buf),
            ByteOrder::BigEndian => BigEndian::read_i32(buf),
        }
    }

    /// Read an IEEE-754 single from the first 4 bytes of `buf`
    pub fn read_f32(self, buf: &[u8]) -> f32 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_f32(buf),
            ByteOrder::BigEndian => BigEndian::read_f32(buf),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ByteOrder::LittleEndian => "le",
            ByteOrder::BigEndian => "be",
        };
        write!(f, "{}", name)
    }
}
