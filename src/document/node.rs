//! Decoded YAML values and their coercions.
//!
//! A `YamlValue` is what a path resolves to: one of the YAML scalar kinds, or a
//! `Container` holding the canonical text of a mapping or sequence that has not
//! been decoded further. Every coercion on `YamlValue` is total: asking for a
//! number from a string that isn't one yields `0`, asking for a bool from a
//! container yields `false`, and so on.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::node::YamlValue;
//!
//! let port = YamlValue::Number { num: 5432.0, raw: Some("5432".to_string()) };
//! assert_eq!(port.int(), 5432);
//! assert_eq!(port.string(), "5432");
//!
//! let flag = YamlValue::String("yes".to_string());
//! assert!(flag.bool());
//! assert_eq!(flag.int(), 0);
//! ```

use std::fmt;

/// The type tag of a `YamlValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    False,
    Number,
    String,
    True,
    /// A mapping or sequence kept as YAML text.
    Yaml,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "Null",
            Kind::False => "False",
            Kind::Number => "Number",
            Kind::String => "String",
            Kind::True => "True",
            Kind::Yaml => "YAML",
        };
        f.write_str(name)
    }
}

/// A decoded YAML value.
///
/// Scalars are decoded directly. Mappings and sequences are kept as
/// `Container` text that re-parses to the same structure; they are only
/// decoded again when the caller asks for them (`array`, `map`, or a further
/// path lookup).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum YamlValue {
    #[default]
    Null,
    False,
    True,
    /// A number. `raw` is the scalar text as written in the document and is
    /// preferred over `num` wherever exact integers matter.
    Number { num: f64, raw: Option<String> },
    String(String),
    /// Canonical YAML text of a mapping or sequence.
    Container(String),
}

impl YamlValue {
    /// Builds a number from a count or index, keeping its exact text.
    pub fn from_count(count: usize) -> Self {
        YamlValue::Number {
            num: count as f64,
            raw: Some(count.to_string()),
        }
    }

    /// Returns the type tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            YamlValue::Null => Kind::Null,
            YamlValue::False => Kind::False,
            YamlValue::True => Kind::True,
            YamlValue::Number { .. } => Kind::Number,
            YamlValue::String(_) => Kind::String,
            YamlValue::Container(_) => Kind::Yaml,
        }
    }

    /// Returns true unless this value is `Null`.
    pub fn exists(&self) -> bool {
        !matches!(self, YamlValue::Null)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, YamlValue::Container(_))
    }

    /// Returns the retained source text of a number or container.
    pub fn raw(&self) -> Option<&str> {
        match self {
            YamlValue::Number { raw, .. } => raw.as_deref(),
            YamlValue::Container(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns the string form of the value.
    ///
    /// `Null` renders as the empty string, booleans as `true`/`false`, numbers
    /// as their original text (or the shortest decimal that round-trips when
    /// there is none), and containers as their YAML text.
    pub fn string(&self) -> String {
        match self {
            YamlValue::Null => String::new(),
            YamlValue::False => "false".to_string(),
            YamlValue::True => "true".to_string(),
            YamlValue::Number { raw: Some(raw), .. } => raw.clone(),
            YamlValue::Number { num, raw: None } => format!("{}", num),
            YamlValue::String(s) => s.clone(),
            YamlValue::Container(raw) => raw.clone(),
        }
    }

    /// Returns the boolean form of the value.
    ///
    /// Strings accept the YAML 1.1 spellings (`yes`/`no`, `on`/`off`) and
    /// `1`/`0`, case-insensitively.
    ///
    /// ```
    /// use yamlpick::document::node::YamlValue;
    ///
    /// assert!(YamlValue::String("ON".to_string()).bool());
    /// assert!(!YamlValue::String("off".to_string()).bool());
    /// assert!(YamlValue::Number { num: -2.0, raw: None }.bool());
    /// assert!(!YamlValue::Container("- 1\n".to_string()).bool());
    /// ```
    pub fn bool(&self) -> bool {
        match self {
            YamlValue::True => true,
            YamlValue::Number { num, .. } => *num != 0.0,
            YamlValue::String(s) => parse_bool_text(s),
            YamlValue::Null | YamlValue::False | YamlValue::Container(_) => false,
        }
    }

    /// Returns the signed integer form of the value.
    ///
    /// Numbers are read from their original text when it is an integer, so
    /// values beyond 2^53 keep every digit. Otherwise the float is truncated,
    /// saturating at the `i64` bounds.
    pub fn int(&self) -> i64 {
        match self {
            YamlValue::True => 1,
            YamlValue::String(s) => s.parse::<i64>().unwrap_or(0),
            YamlValue::Number { num, raw } => raw
                .as_deref()
                .and_then(|r| r.trim().parse::<i64>().ok())
                .unwrap_or(*num as i64),
            YamlValue::Null | YamlValue::False | YamlValue::Container(_) => 0,
        }
    }

    /// Returns the unsigned integer form of the value. Negative values are `0`.
    pub fn uint(&self) -> u64 {
        match self {
            YamlValue::True => 1,
            YamlValue::String(s) => s.parse::<u64>().unwrap_or(0),
            YamlValue::Number { num, raw } => {
                if let Some(n) = raw.as_deref().and_then(|r| r.trim().parse::<u64>().ok()) {
                    return n;
                }
                if *num < 0.0 {
                    0
                } else {
                    *num as u64
                }
            }
            YamlValue::Null | YamlValue::False | YamlValue::Container(_) => 0,
        }
    }

    /// Returns the float form of the value.
    pub fn float(&self) -> f64 {
        match self {
            YamlValue::True => 1.0,
            YamlValue::String(s) => s.parse::<f64>().unwrap_or(0.0),
            YamlValue::Number { num, .. } => *num,
            YamlValue::Null | YamlValue::False | YamlValue::Container(_) => 0.0,
        }
    }

    /// Returns the text used when comparing the value for equality.
    ///
    /// Numbers are rendered from their decoded value, so `1.50` reads as `1.5`
    /// and `1.0` as `1`. Integers keep every digit of their source text.
    pub(crate) fn canonical_string(&self) -> String {
        match self {
            YamlValue::Number { num, raw } => {
                let exact = raw.as_deref().map(str::trim);
                if let Some(i) = exact.and_then(|r| r.parse::<i64>().ok()) {
                    i.to_string()
                } else if let Some(u) = exact.and_then(|r| r.parse::<u64>().ok()) {
                    u.to_string()
                } else {
                    format!("{}", num)
                }
            }
            other => other.string(),
        }
    }

    /// Widens the value to a float for ordering comparisons.
    ///
    /// Returns `None` when the value has no numeric reading or reads as NaN.
    pub(crate) fn as_comparable(&self) -> Option<f64> {
        let n = match self {
            YamlValue::Number { num, .. } => *num,
            YamlValue::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        (!n.is_nan()).then_some(n)
    }
}

impl fmt::Display for YamlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}

/// Reads a string as a boolean the lenient way YAML configs spell them.
fn parse_bool_text(s: &str) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" | "" => false,
        // remaining spelling accepted by a plain boolean parse
        other => other == "t",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(num: f64, raw: Option<&str>) -> YamlValue {
        YamlValue::Number {
            num,
            raw: raw.map(str::to_string),
        }
    }

    #[test]
    fn test_string_renderings() {
        assert_eq!(YamlValue::Null.string(), "");
        assert_eq!(YamlValue::False.string(), "false");
        assert_eq!(YamlValue::True.string(), "true");
        assert_eq!(number(47.0, Some("47")).string(), "47");
        assert_eq!(number(3.0, None).string(), "3");
        assert_eq!(number(0.1, None).string(), "0.1");
        assert_eq!(YamlValue::String("Prichard".to_string()).string(), "Prichard");
        assert_eq!(YamlValue::Container("a: 1\n".to_string()).string(), "a: 1\n");
    }

    #[test]
    fn test_display_matches_string() {
        let value = number(1.5, Some("1.50"));
        assert_eq!(format!("{}", value), "1.50");
    }

    #[test]
    fn test_bool_from_strings() {
        for truthy in ["true", "TRUE", "Yes", "on", "1", "t"] {
            assert!(YamlValue::String(truthy.to_string()).bool(), "{}", truthy);
        }
        for falsy in ["false", "No", "OFF", "0", "", "maybe", "2"] {
            assert!(!YamlValue::String(falsy.to_string()).bool(), "{}", falsy);
        }
    }

    #[test]
    fn test_bool_other_variants() {
        assert!(YamlValue::True.bool());
        assert!(!YamlValue::False.bool());
        assert!(!YamlValue::Null.bool());
        assert!(number(0.5, None).bool());
        assert!(!number(0.0, Some("0")).bool());
    }

    #[test]
    fn test_int_prefers_raw_text() {
        let max = number(i64::MAX as f64, Some("9223372036854775807"));
        assert_eq!(max.int(), i64::MAX);

        let min = number(i64::MIN as f64, Some("-9223372036854775808"));
        assert_eq!(min.int(), i64::MIN);

        // float text falls back to truncation
        assert_eq!(number(3.99, Some("3.99")).int(), 3);
        assert_eq!(number(-3.99, None).int(), -3);
    }

    #[test]
    fn test_int_saturates_and_handles_nan() {
        assert_eq!(number(1e300, Some("1e300")).int(), i64::MAX);
        assert_eq!(number(f64::NAN, Some(".nan")).int(), 0);
    }

    #[test]
    fn test_int_from_strings() {
        assert_eq!(YamlValue::String("42".to_string()).int(), 42);
        assert_eq!(YamlValue::String("-7".to_string()).int(), -7);
        assert_eq!(YamlValue::String("4.2".to_string()).int(), 0);
        assert_eq!(YamlValue::String("abc".to_string()).int(), 0);
        assert_eq!(YamlValue::True.int(), 1);
        assert_eq!(YamlValue::Container("[1]".to_string()).int(), 0);
    }

    #[test]
    fn test_uint_clamps_negatives() {
        assert_eq!(number(-5.0, Some("-5")).uint(), 0);
        assert_eq!(number(-0.5, None).uint(), 0);
        assert_eq!(YamlValue::String("-5".to_string()).uint(), 0);
        assert_eq!(
            number(18446744073709551615.0, Some("18446744073709551615")).uint(),
            u64::MAX
        );
        assert_eq!(number(12.7, None).uint(), 12);
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(YamlValue::True.float(), 1.0);
        assert_eq!(YamlValue::String("2.5".to_string()).float(), 2.5);
        assert_eq!(YamlValue::String("nope".to_string()).float(), 0.0);
        assert_eq!(number(9.75, Some("9.75")).float(), 9.75);
        assert_eq!(YamlValue::Null.float(), 0.0);
    }

    #[test]
    fn test_comparable_widening() {
        assert_eq!(number(4.0, None).as_comparable(), Some(4.0));
        assert_eq!(YamlValue::String("1.5e10".to_string()).as_comparable(), Some(1.5e10));
        assert_eq!(YamlValue::String("invalid".to_string()).as_comparable(), None);
        assert_eq!(number(f64::NAN, None).as_comparable(), None);
        assert_eq!(YamlValue::True.as_comparable(), None);
    }

    #[test]
    fn test_kind_and_exists() {
        assert_eq!(YamlValue::Null.kind(), Kind::Null);
        assert!(!YamlValue::Null.exists());
        assert_eq!(YamlValue::Container("{}".to_string()).kind(), Kind::Yaml);
        assert!(YamlValue::False.exists());
        assert_eq!(Kind::Yaml.to_string(), "YAML");
    }

    #[test]
    fn test_from_count() {
        let count = YamlValue::from_count(3);
        assert_eq!(count.int(), 3);
        assert_eq!(count.raw(), Some("3"));
    }
}
