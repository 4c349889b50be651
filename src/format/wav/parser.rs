//! RIFF/WAVE container parser

use super::file::WaveFile;
use super::header::WavFormat;
use super::{ChunkHeader, CHUNK_HEADER_SIZE, DATA_CHUNK, FMT_CHUNK, RIFF_HEADER_SIZE, RIFF_MAGIC, WAVE_MAGIC};
use crate::error::{Error, Result};
use crate::util::ByteOrder;
use bytes::Bytes;
use tracing::{debug, trace};

/// Options controlling the chunk walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Skip the pad byte that follows an odd-length chunk
    ///
    /// Off by default: the next chunk is read at `offset + 8 + size` with no
    /// alignment, so files relying on RIFF word alignment need this enabled.
    pub word_aligned_chunks: bool,
}

/// Parses complete in-memory WAVE images
#[derive(Debug, Clone, Default)]
pub struct WavParser {
    options: ParseOptions,
}

impl WavParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParseOptions) -> Self {
        WavParser { options }
    }

    /// Get the parser options
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a complete file image into a [`WaveFile`]
    ///
    /// Only the outer RIFF/WAVE IDs and chunk bounds are validated. A missing
    /// `fmt ` chunk leaves a zeroed descriptor and a missing `data` chunk an
    /// empty payload; both surface later when decoding. If several `data`
    /// chunks are present the last one wins.
    pub fn parse(&self, bytes: &[u8]) -> Result<WaveFile> {
        let byte_order = ByteOrder::LittleEndian;

        if bytes.len() < RIFF_HEADER_SIZE {
            return Err(Error::format(format!(
                "Buffer too small for RIFF header: {} bytes",
                bytes.len()
            )));
        }

        if &bytes[0..4] != RIFF_MAGIC {
            return Err(Error::format("Not a valid RIFF file"));
        }

        if &bytes[8..12] != WAVE_MAGIC {
            return Err(Error::format("Not a valid WAVE file"));
        }

        // Declared size counts the bytes after the size field itself
        let logical_end = u64::from(byte_order.read_u32(&bytes[4..8])) + 8;

        let mut format = WavFormat::default();
        let mut data = Bytes::new();
        let mut offset = RIFF_HEADER_SIZE;

        while (offset as u64) < logical_end {
            let header = ChunkHeader::read(bytes, offset, byte_order)?;
            let payload = Self::chunk_payload(bytes, offset, &header)?;

            if &header.id == FMT_CHUNK {
                trace!("fmt chunk at offset {} ({} bytes)", offset, header.size);
                format = WavFormat::from_fmt_chunk(payload, byte_order)?;
            } else if &header.id == DATA_CHUNK {
                trace!("data chunk at offset {} ({} bytes)", offset, header.size);
                data = Bytes::copy_from_slice(payload);
            }

            offset += CHUNK_HEADER_SIZE + payload.len();
            if self.options.word_aligned_chunks && header.size % 2 != 0 {
                offset += 1;
            }
        }

        format.signed = format.bits_per_sample > 8;
        format.byte_order = byte_order;

        debug!(
            "Parsed WAV: {} {}ch {}Hz {}-bit, {} data bytes",
            format.format_tag,
            format.channels,
            format.sample_rate,
            format.bits_per_sample,
            data.len()
        );

        Ok(WaveFile::from_parts(format, data))
    }

    /// Bounds-checked payload slice of the chunk at `offset`
    fn chunk_payload<'a>(bytes: &'a [u8], offset: usize, header: &ChunkHeader) -> Result<&'a [u8]> {
        let start = offset + CHUNK_HEADER_SIZE;
        start
            .checked_add(header.size as usize)
            .and_then(|end| bytes.get(start..end))
            .ok_or_else(|| {
                Error::format(format!(
                    "Chunk '{}' at offset {} claims {} bytes but only {} remain",
                    header.id_str(),
                    offset,
                    header.size,
                    bytes.len().saturating_sub(start)
                ))
            })
    }
}

/// Parse a complete WAVE image with default options
pub fn parse(bytes: &[u8]) -> Result<WaveFile> {
    WavParser::new().parse(bytes)
}

/// Parse a complete WAVE image with the given options
pub fn parse_with_options(bytes: &[u8], options: ParseOptions) -> Result<WaveFile> {
    WavParser::with_options(options).parse(bytes)
}
