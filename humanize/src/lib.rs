/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Parsing of human-readable byte sizes ("60MB", "1.5GiB", "1024").
//!
//! The grammar matches the `ParseBytes` function of the go-humanize
//! library, which fluent-bit's consumers conventionally use: decimal
//! suffixes scale by 1000, binary (IEC) suffixes by 1024, suffixes are
//! case-insensitive and a bare number is a raw byte count.

mod error;
mod parser;
pub mod prefix;

pub use error::ParseError;
pub use parser::parse_bytes;
pub use prefix::{BinPrefix, DecPrefix};
