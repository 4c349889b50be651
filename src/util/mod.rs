//! Common utilities and data structures

pub mod byte_order;
pub mod samplefmt;

pub use byte_order::ByteOrder;
pub use samplefmt::SampleFormat;
