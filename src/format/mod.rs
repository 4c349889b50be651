//! Container format handling
//!
//! Only RIFF/WAVE is implemented: [`wav`] walks the chunk list of a fully
//! buffered file and produces a [`WaveFile`].

pub mod wav;

pub use wav::{parse, parse_with_options, FormatTag, ParseOptions, WavFormat, WavParser, WaveFile};
