//! WAV audio format support
//!
//! This module implements RIFF/WAV container parsing into an in-memory
//! [`WaveFile`]: the `fmt ` chunk's format fields plus the `data` chunk's raw
//! sample bytes. Every other chunk is skipped by length.

pub mod file;
pub mod header;
pub mod parser;

pub use file::WaveFile;
pub use header::{FormatTag, WavFormat};
pub use parser::{parse, parse_with_options, ParseOptions, WavParser};

use crate::error::{Error, Result};
use crate::util::ByteOrder;

/// WAV format magic numbers
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const WAVE_MAGIC: &[u8; 4] = b"WAVE";
pub const FMT_CHUNK: &[u8; 4] = b"fmt ";
pub const DATA_CHUNK: &[u8; 4] = b"data";

/// Size of the outer RIFF header (ID, size, form type)
pub const RIFF_HEADER_SIZE: usize = 12;

/// Size of a chunk header (4 byte ID + 4 byte size)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Chunk header (4 byte ID + 4 byte size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub id: [u8; 4],
    pub size: u32,
}

impl ChunkHeader {
    /// Read the chunk header starting at `offset`
    pub fn read(bytes: &[u8], offset: usize, byte_order: ByteOrder) -> Result<Self> {
        let header = offset
            .checked_add(CHUNK_HEADER_SIZE)
            .and_then(|end| bytes.get(offset..end))
            .ok_or_else(|| {
                Error::format(format!(
                    "Truncated chunk header at offset {} ({} bytes available)",
                    offset,
                    bytes.len()
                ))
            })?;

        let mut id = [0u8; 4];
        id.copy_from_slice(&header[0..4]);

        Ok(ChunkHeader {
            id,
            size: byte_order.read_u32(&header[4..8]),
        })
    }

    /// Chunk ID as text, for diagnostics
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }
}
