//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `scale/` - Task fetching from the Scale annotation platform
//! - `probe/` - Image dimension resolution over HTTP
//! - `file/` - Atomic JSON report persistence

pub mod file;
pub mod probe;
pub mod scale;

pub use file::JsonFileSink;
pub use probe::HttpDimensionProbe;
pub use scale::ScaleTaskSource;
