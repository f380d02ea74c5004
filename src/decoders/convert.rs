//! Text conversions, chained after a string decoder with `then`.

use regex::Regex;

use super::{format_error, Decoders};
use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::result::{fail, valid};

impl Decoders {
    /// Parses a base-10 integer. Surrounding whitespace is ignored; anything
    /// else after the digits is rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use verdict::result::valid;
    ///
    /// let parse = Decoders::parse_int();
    /// assert_eq!(parse.parse(&" 42 ".to_string()), valid(42));
    /// assert!(parse.parse(&"4x".to_string()).is_failure());
    /// ```
    pub fn parse_int() -> Decoder<i64, String> {
        Decoder::new(|text: &String| match text.trim().parse::<i64>() {
            Ok(number) => valid(number),
            Err(_) => fail(format_error(text, "int")),
        })
    }

    /// Parses a decimal or scientific-notation float. `NaN` is rejected.
    pub fn parse_float() -> Decoder<f64, String> {
        Decoder::new(|text: &String| match text.trim().parse::<f64>() {
            Ok(number) if !number.is_nan() => valid(number),
            _ => fail(format_error(text, "float")),
        })
    }

    /// Accepts exactly `"true"` or `"false"`.
    pub fn parse_bool() -> Decoder<bool, String> {
        Decoder::new(|text: &String| match text.as_str() {
            "true" => valid(true),
            "false" => valid(false),
            _ => fail(format_error(text, "bool")),
        })
    }

    /// Passes through strings that contain a match of `pattern`.
    ///
    /// Fails to build when the pattern is not a valid regular expression.
    /// Anchor the pattern (`^...$`) to require a full match.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    ///
    /// let zip = Decoders::matches(r"^\d{5}$").unwrap();
    /// assert!(zip.parse(&"12345".to_string()).is_success());
    /// assert!(zip.parse(&"1234".to_string()).is_failure());
    /// ```
    pub fn matches(pattern: &str) -> Result<Decoder<String, String>, regex::Error> {
        Ok(Self::matches_regex(Regex::new(pattern)?))
    }

    /// Same as [`matches`](Decoders::matches) with a compiled regex.
    pub fn matches_regex(pattern: Regex) -> Decoder<String, String> {
        Decoder::new(move |text: &String| {
            if pattern.is_match(text) {
                valid(text.clone())
            } else {
                fail(
                    DecodeError::new(
                        text.as_str(),
                        format!("Expected to match {}. Got: {}", pattern, text),
                    )
                    .with_code("pattern"),
                )
            }
        })
    }

    /// Interprets a string or a number as a UTC instant.
    ///
    /// Accepted forms:
    /// - RFC 3339 (`2024-03-01T12:00:00Z`, `2024-03-01T12:00:00+02:00`)
    /// - RFC 2822 (`Fri, 01 Mar 2024 12:00:00 +0000`)
    /// - a local date-time without offset, taken as UTC (`2024-03-01T12:00:00`)
    /// - a bare date, taken as midnight UTC (`2024-03-01`)
    /// - a whole number of milliseconds since the Unix epoch, as an integer
    ///   or as a float with no fractional part (`0.0`, `1.7e12`)
    #[cfg(feature = "dates")]
    pub fn parse_date() -> Decoder<chrono::DateTime<chrono::Utc>> {
        use serde_json::Value;

        Decoder::new(|value: &Value| {
            let parsed = match value {
                Value::String(text) => dates::parse_text(text),
                Value::Number(number) => dates::epoch_millis(number)
                    .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis),
                _ => None,
            };
            match parsed {
                Some(instant) => valid(instant),
                None => fail(
                    DecodeError::new(value.clone(), format!("Expected valid date. Got: {}", value))
                        .with_code("invalid_format"),
                ),
            }
        })
    }
}

#[cfg(feature = "dates")]
mod dates {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Integers as-is; floats only when finite and whole (`0.0`, `1.7e12`).
    /// Out-of-range floats saturate and are then rejected by chrono.
    pub(super) fn epoch_millis(number: &serde_json::Number) -> Option<i64> {
        number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|millis| millis.is_finite() && millis.fract() == 0.0)
                .map(|millis| millis as i64)
        })
    }

    pub(super) fn parse_text(text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
            return Some(instant.with_timezone(&Utc));
        }
        if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
            return Some(instant.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(local) = NaiveDateTime::parse_from_str(text, format) {
                return Some(local.and_utc());
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultExt;

    fn s(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_parse_int() {
        let decoder = Decoders::parse_int();
        assert_eq!(decoder.parse(&s("1")), valid(1));
        assert_eq!(decoder.parse(&s("-17")), valid(-17));
        assert!(decoder.parse(&s("1.5")).is_failure());

        let result = decoder.parse(&s("a"));
        let errors = result.as_failure().unwrap();
        assert_eq!(errors.first().reason, "Expected valid int. Got: a");
        assert_eq!(errors.first().code, "invalid_format");
    }

    #[test]
    fn test_parse_float() {
        let decoder = Decoders::parse_float();
        assert_eq!(decoder.parse(&s("1.5")), valid(1.5));
        assert_eq!(decoder.parse(&s("1e3")), valid(1000.0));
        assert!(decoder.parse(&s("NaN")).is_failure());
        assert!(decoder.parse(&s("")).is_failure());
    }

    #[test]
    fn test_parse_bool() {
        let decoder = Decoders::parse_bool();
        assert_eq!(decoder.parse(&s("true")), valid(true));
        assert_eq!(decoder.parse(&s("false")), valid(false));
        assert!(decoder.parse(&s("TRUE")).is_failure());
        assert!(decoder.parse(&s("1")).is_failure());
    }

    #[test]
    fn test_matches() {
        let decoder = Decoders::matches(r"^[a-z]+@[a-z]+\.com$").unwrap();
        assert_eq!(decoder.parse(&s("jo@example.com")), valid(s("jo@example.com")));

        let result = decoder.parse(&s("not an email"));
        assert_eq!(result.as_failure().unwrap().first().code, "pattern");
    }

    #[test]
    fn test_matches_rejects_bad_pattern() {
        assert!(Decoders::matches("(unclosed").is_err());
    }

    #[cfg(feature = "dates")]
    mod date_tests {
        use super::*;
        use chrono::{TimeZone, Utc};
        use serde_json::json;

        #[test]
        fn test_parse_date_accepted_forms() {
            let decoder = Decoders::parse_date();
            let noon = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

            assert_eq!(decoder.parse(&json!("2024-03-01T12:00:00Z")), valid(noon));
            assert_eq!(decoder.parse(&json!("2024-03-01T14:00:00+02:00")), valid(noon));
            assert_eq!(decoder.parse(&json!("Fri, 01 Mar 2024 12:00:00 +0000")), valid(noon));
            assert_eq!(decoder.parse(&json!("2024-03-01T12:00:00")), valid(noon));
            assert_eq!(decoder.parse(&json!(noon.timestamp_millis())), valid(noon));

            let epoch = decoder.parse(&json!("1970-01-01T00:00:00.000Z"));
            assert_eq!(epoch.as_success().map(|instant| instant.timestamp_millis()), Some(0));
        }

        #[test]
        fn test_parse_date_whole_float_millis() {
            let decoder = Decoders::parse_date();
            let epoch = Utc.timestamp_millis_opt(0).unwrap();

            assert_eq!(decoder.parse(&json!(0.0)), valid(epoch));
            let later = decoder.parse(&json!(1.7e12));
            assert_eq!(
                later.as_success().map(|instant| instant.timestamp_millis()),
                Some(1_700_000_000_000)
            );
            assert!(decoder.parse(&json!(1.5)).is_failure());
            assert!(decoder.parse(&json!(1e300)).is_failure());
        }

        #[test]
        fn test_parse_date_bare_date_is_midnight() {
            let decoder = Decoders::parse_date();
            let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
            assert_eq!(decoder.parse(&json!("2024-03-01")), valid(midnight));
        }

        #[test]
        fn test_parse_date_rejects() {
            let decoder = Decoders::parse_date();
            assert!(decoder.parse(&json!("yesterday")).is_failure());
            assert!(decoder.parse(&json!(true)).is_failure());
            assert!(decoder.parse(&json!("32 Jan 1970")).is_failure());

            let result = decoder.parse(&json!("2024-13-45"));
            let errors = result.as_failure().unwrap();
            assert_eq!(errors.first().code, "invalid_format");
        }
    }
}
