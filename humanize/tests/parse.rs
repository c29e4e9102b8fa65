/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use humanize::{parse_bytes, ParseError};

#[test]
fn bare_numbers() {
    assert_eq!(parse_bytes("0").unwrap(), 0);
    assert_eq!(parse_bytes("42").unwrap(), 42);
    assert_eq!(parse_bytes("1024").unwrap(), 1024);
    assert_eq!(parse_bytes("42B").unwrap(), 42);
    assert_eq!(parse_bytes("1,000").unwrap(), 1000);
}

#[test]
fn decimal_suffixes() {
    assert_eq!(parse_bytes("1KB").unwrap(), 1000);
    assert_eq!(parse_bytes("60MB").unwrap(), 60_000_000);
    assert_eq!(parse_bytes("3GB").unwrap(), 3_000_000_000);
    assert_eq!(parse_bytes("1TB").unwrap(), 1_000_000_000_000);
    assert_eq!(parse_bytes("2K").unwrap(), 2000);
    assert_eq!(parse_bytes("5M").unwrap(), 5_000_000);
}

#[test]
fn binary_suffixes() {
    assert_eq!(parse_bytes("1KiB").unwrap(), 1024);
    assert_eq!(parse_bytes("64MiB").unwrap(), 67_108_864);
    assert_eq!(parse_bytes("1GiB").unwrap(), 1_073_741_824);
    assert_eq!(parse_bytes("2Ki").unwrap(), 2048);
}

#[test]
fn case_insensitive() {
    assert_eq!(parse_bytes("60mb").unwrap(), 60_000_000);
    assert_eq!(parse_bytes("60Mb").unwrap(), 60_000_000);
    assert_eq!(parse_bytes("1kIb").unwrap(), 1024);
}

#[test]
fn fractional_magnitudes() {
    assert_eq!(parse_bytes("1.5KB").unwrap(), 1500);
    assert_eq!(parse_bytes("33.4MB").unwrap(), 33_400_000);
    assert_eq!(parse_bytes(".5kb").unwrap(), 500);
    // truncated, not rounded
    assert_eq!(parse_bytes("1.9").unwrap(), 1);
}

#[test]
fn whitespace_before_suffix() {
    assert_eq!(parse_bytes("60 MB").unwrap(), 60_000_000);
    assert_eq!(parse_bytes("60 MB ").unwrap(), 60_000_000);
}

#[test]
fn rejects_garbage() {
    assert!(matches!(parse_bytes(""), Err(ParseError::Syntax(_))));
    assert!(matches!(parse_bytes("bogus"), Err(ParseError::Syntax(_))));
    assert!(matches!(parse_bytes("-1"), Err(ParseError::Syntax(_))));
    assert!(matches!(parse_bytes("1.2.3"), Err(ParseError::Syntax(_))));
    assert!(matches!(
        parse_bytes("10ZB"),
        Err(ParseError::UnknownSuffix(_))
    ));
    assert!(matches!(
        parse_bytes("1 024"),
        Err(ParseError::UnknownSuffix(_))
    ));
}
