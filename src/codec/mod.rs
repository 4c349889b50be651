//! Codec implementations
//!
//! Only the uncompressed PCM and 32-bit IEEE float paths are decoded.
//! A-Law and Mu-Law are recognized by tag and reported as unsupported.

pub mod pcm;

pub use pcm::{to_float_samples, to_planar_samples, PcmConfig, PcmDecoder};
