use std::str;

use sgr_scan::{INTRODUCER, SEPARATOR};
use thiserror::Error;

use crate::color::Color;

/// Content-validation failures inside a delimited colour sequence.
///
/// The tokenizer never raises these; only well-delimited but internally
/// corrupt sequences do. Both variants are recoverable and the caller
/// decides whether to skip, log or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A semicolon-delimited field is not a valid base-10 integer literal.
    #[error("malformed colour code number")]
    MalformedNumber,

    /// A field parsed as an integer but falls outside `0..=255`.
    #[error("colour code value outside the byte range")]
    ByteOverflow,
}

/// Decodes the parameter list of a delimited colour sequence.
///
/// Strips the introducer and terminator, splits the interior on `;` and
/// parses each field as a byte-ranged integer. Fields decode in input
/// order; any failure aborts the whole decode with no partial result.
pub fn decode(sequence: &[u8]) -> Result<Vec<Color>, DecodeError> {
    let interior = sequence
        .get(INTRODUCER.len()..sequence.len().saturating_sub(1))
        .unwrap_or_default();
    let interior =
        str::from_utf8(interior).map_err(|_| DecodeError::MalformedNumber)?;

    interior.split(SEPARATOR as char).map(parse_field).collect()
}

/// Variant of [`decode`] for call sites that already validated the token
/// with `sgr_scan::is_complete_sequence` and treat decode failure as a
/// contract violation.
///
/// # Panics
///
/// Panics if the sequence fails to decode.
pub fn must_decode(sequence: &[u8]) -> Vec<Color> {
    match decode(sequence) {
        Ok(codes) => codes,
        Err(err) => panic!("invalid colour sequence: {err}"),
    }
}

fn parse_field(field: &str) -> Result<Color, DecodeError> {
    let value: i64 =
        field.parse().map_err(|_| DecodeError::MalformedNumber)?;

    if !(0..=255).contains(&value) {
        return Err(DecodeError::ByteOverflow);
    }

    Ok(Color::new(value as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BACKGROUND_OFFSET, HIGH_INTENSITY_OFFSET};

    #[test]
    fn decodes_single_code() {
        assert_eq!(decode(b"\x1b[0m"), Ok(vec![Color::NORMAL]));
    }

    #[test]
    fn decodes_separated_codes() {
        assert_eq!(
            decode(b"\x1b[0;31m"),
            Ok(vec![Color::NORMAL, Color::RED])
        );
    }

    #[test]
    fn decodes_compound_sequence() {
        assert_eq!(
            decode(b"\x1b[0;31;44;91;104m"),
            Ok(vec![
                Color::NORMAL,
                Color::RED,
                Color::new(Color::BLUE.code() + BACKGROUND_OFFSET),
                Color::new(Color::RED.code() + HIGH_INTENSITY_OFFSET),
                Color::new(
                    Color::BLUE.code()
                        + BACKGROUND_OFFSET
                        + HIGH_INTENSITY_OFFSET
                ),
            ])
        );
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert_eq!(decode(b"\x1b[3am"), Err(DecodeError::MalformedNumber));
    }

    #[test]
    fn rejects_empty_field() {
        assert_eq!(decode(b"\x1b[m"), Err(DecodeError::MalformedNumber));
        assert_eq!(decode(b"\x1b[31;;0m"), Err(DecodeError::MalformedNumber));
    }

    #[test]
    fn rejects_values_outside_byte_range() {
        assert_eq!(decode(b"\x1b[256m"), Err(DecodeError::ByteOverflow));
        assert_eq!(decode(b"\x1b[999m"), Err(DecodeError::ByteOverflow));
        assert_eq!(decode(b"\x1b[-1m"), Err(DecodeError::ByteOverflow));
        assert_eq!(decode(b"\x1b[255m"), Ok(vec![Color::new(255)]));
    }

    #[test]
    fn must_decode_passes_through_valid_codes() {
        assert_eq!(must_decode(b"\x1b[31m"), vec![Color::RED]);
    }

    #[test]
    #[should_panic(expected = "invalid colour sequence")]
    fn must_decode_panics_on_corrupt_sequence() {
        must_decode(b"\x1b[3am");
    }
}
