//! Turning token text into typed values.

use crate::error::Error;

/// `f64::from_str` accepts these, AFM numerals don't.
fn is_special_float(s: &str) -> bool {
    let s = s.trim_start_matches(['+', '-']);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|special| s.eq_ignore_ascii_case(special))
}

pub(crate) fn parse_int(s: &str) -> Result<i32, Error> {
    s.parse::<i32>().map_err(|_| Error::InvalidNumber {
        expected: "integer",
        found: s.to_string(),
    })
}

pub(crate) fn parse_float(s: &str) -> Result<f64, Error> {
    if !is_special_float(s) {
        if let Ok(num) = s.parse::<f64>() {
            return Ok(num);
        }
    }
    Err(Error::InvalidNumber {
        expected: "float",
        found: s.to_string(),
    })
}

pub(crate) fn parse_bool(s: &str) -> Result<bool, Error> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::InvalidBool(s.to_string()))
    }
}

/// A character code written in hex, either bare (`20`) or bracketed (`<20>`).
pub(crate) fn parse_hex_int(s: &str) -> Result<i32, Error> {
    let digits = s
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        if let Ok(num) = i32::from_str_radix(digits, 16) {
            return Ok(num);
        }
    }
    Err(Error::InvalidNumber {
        expected: "hex integer",
        found: s.to_string(),
    })
}

/// Decode a glyph name written as `<hex bytes>`, the bytes being Latin-1.
pub fn decode_hex_string(s: &str) -> Result<String, Error> {
    let invalid = |reason| Error::InvalidHexString {
        value: s.to_string(),
        reason,
    };
    if s.len() < 2 {
        return Err(invalid("expected at least 2 characters"));
    }
    let Some(hex) = s.strip_prefix('<').and_then(|s| s.strip_suffix('>')) else {
        return Err(invalid("should be enclosed by angle brackets"));
    };
    if hex.len() % 2 != 0 {
        return Err(invalid("odd number of hex digits"));
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| match (hex_digit(pair[0]), hex_digit(pair[1])) {
            (Some(hi), Some(lo)) => Ok(char::from((hi << 4) | lo)),
            _ => Err(invalid("not a hex digit")),
        })
        .collect()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::ErrorKind;

    #[rstest]
    #[case::plain("278", 278)]
    #[case::negative("-1", -1)]
    #[case::plus("+12", 12)]
    fn ints(#[case] text: &str, #[case] expected: i32) {
        assert_eq!(parse_int(text).unwrap(), expected);
    }

    #[rstest]
    #[case::decimal("1.5")]
    #[case::thousands("1,000")]
    #[case::word("twelve")]
    #[case::empty("")]
    fn bad_ints(#[case] text: &str) {
        assert_eq!(parse_int(text).unwrap_err().kind(), ErrorKind::Format);
    }

    #[rstest]
    #[case::int("-12", -12.0)]
    #[case::decimal("0.5", 0.5)]
    #[case::leading_dot(".25", 0.25)]
    #[case::exponent("1e3", 1000.0)]
    fn floats(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_float(text).unwrap(), expected);
    }

    #[rstest]
    #[case::nan("NaN")]
    #[case::inf("inf")]
    #[case::neg_infinity("-Infinity")]
    #[case::comma("0,5")]
    #[case::suffix("12pt")]
    fn bad_floats(#[case] text: &str) {
        assert_eq!(parse_float(text).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn bools() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("True").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert_eq!(parse_bool("1").unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn hex_ints() {
        assert_eq!(parse_hex_int("<20>").unwrap(), 0x20);
        assert_eq!(parse_hex_int("FF").unwrap(), 0xff);
        assert_eq!(parse_hex_int("<8140>").unwrap(), 0x8140);
        assert!(parse_hex_int("<>").is_err());
        assert!(parse_hex_int("<2G>").is_err());
        assert!(parse_hex_int("-1").is_err());
    }

    #[test]
    fn hex_strings() {
        assert_eq!(decode_hex_string("<4142>").unwrap(), "AB");
        assert_eq!(decode_hex_string("<>").unwrap(), "");
        assert_eq!(decode_hex_string("<e9ff>").unwrap(), "\u{e9}\u{ff}");
    }

    #[rstest]
    #[case::too_short("<")]
    #[case::no_open("4142>")]
    #[case::no_close("<4142")]
    #[case::odd("<414>")]
    #[case::not_hex("<41zz>")]
    fn bad_hex_strings(#[case] text: &str) {
        assert_eq!(
            decode_hex_string(text).unwrap_err().kind(),
            ErrorKind::Format
        );
    }
}
