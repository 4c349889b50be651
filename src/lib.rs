//! zwav - RIFF/WAVE parsing and float sample decoding
//!
//! zwav turns a fully buffered WAVE file image into a [`WaveFile`] (format
//! descriptor plus raw `data` payload) and decodes that payload into
//! normalized `f32` samples.
//!
//! # Architecture
//!
//! - `format`: RIFF/WAVE container parsing
//! - `codec`: PCM and IEEE float sample decoding
//! - `probe`: Printable / JSON reports about a parsed file
//! - `util`: Byte order and sample format definitions
//!
//! # Usage
//!
//! ```rust,no_run
//! let bytes = std::fs::read("tone.wav")?;
//! let wave = zwav_lib::parse(&bytes)?;
//! let samples = wave.to_float_samples()?;
//! println!("{} Hz, {} samples", wave.format().sample_rate, samples.len());
//! # Ok::<(), zwav_lib::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod probe;
pub mod util;

pub use codec::{to_float_samples, to_planar_samples};
pub use error::{Error, Result};
pub use format::wav::{parse, parse_with_options, FormatTag, ParseOptions, WavFormat, WavParser, WaveFile};
pub use util::{ByteOrder, SampleFormat};

/// zwav version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for the zwav library
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// Enable debug output
    pub debug: bool,
}

/// Initialize the zwav library with the given configuration
///
/// Installs a `tracing` subscriber when logging is requested. A subscriber
/// that is already installed is left in place.
pub fn init(config: Config) -> Result<()> {
    if config.verbose || config.debug {
        let level = if config.debug { "debug" } else { "info" };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_writer(std::io::stderr)
            .try_init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_init() {
        assert!(init(Config::default()).is_ok());
        assert!(init(Config {
            verbose: true,
            debug: true,
        })
        .is_ok());
    }
}
