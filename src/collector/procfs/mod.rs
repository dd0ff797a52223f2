//! Collectors for the Linux `/proc` filesystem.
//!
//! This module provides parsers and a collector for reading system-wide
//! information from the `/proc` virtual filesystem.

pub mod parser;
pub mod system;

pub use parser::ParseError;
pub use system::{CollectError, SystemCollector};
