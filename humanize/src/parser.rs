/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::bytes::complete::take_while1;
use nom::IResult;

use super::error::ParseError;
use super::prefix::{BIN_PREFIXES, DEC_PREFIXES};

/// Parse a human-readable byte size to a byte count.
///
/// Accepts a decimal magnitude (comma grouping allowed) followed by an
/// optional case-insensitive suffix: "kb"/"mb"/... scale by powers of
/// 1000, "kib"/"mib"/... by powers of 1024, the short forms "k"/"ki"/...
/// likewise. A bare number is a raw byte count. Fractional results are
/// truncated.
pub fn parse_bytes(input: &str) -> Result<u64, ParseError> {
    let (rest, digits) = magnitude(input)
        .map_err(|_| ParseError::Syntax(input.to_string()))?;

    // Commas are digit grouping and carry no value.
    let num = digits
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| ParseError::Syntax(input.to_string()))?;

    let suffix = rest.trim().to_ascii_lowercase();
    let multiplier = suffix_multiplier(&suffix)
        .ok_or_else(|| ParseError::UnknownSuffix(input.to_string()))?;

    let value = num * multiplier;
    if !value.is_finite() || value >= u64::MAX as f64 {
        return Err(ParseError::OutOfRange(input.to_string()));
    }
    Ok(value as u64)
}

/// Parser for the numeric part of a size string.
fn magnitude(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_digit() || c == '.' || c == ',')(input)
}

fn suffix_multiplier(suffix: &str) -> Option<f64> {
    if suffix.is_empty() || suffix == "b" {
        return Some(1.0);
    }
    let short = suffix.strip_suffix('b').unwrap_or(suffix);
    BIN_PREFIXES
        .iter()
        .find(|p| p.letter() == short)
        .map(|p| p.multiplier())
        .or_else(|| {
            DEC_PREFIXES
                .iter()
                .find(|p| p.letter() == short)
                .map(|p| p.multiplier())
        })
}
