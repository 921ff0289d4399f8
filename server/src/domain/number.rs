//! Number parsing and classification predicates

use std::fmt;

use serde::{Serialize, Serializer};

/// A parsed request number.
///
/// The variant is decided at parse time (a raw value containing `.` parses
/// as a float, anything else as an integer) and stays fixed for the rest of
/// the request. Integer-only predicates are false for floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

impl NumberValue {
    /// Parse a raw query parameter value.
    ///
    /// Returns `None` for anything that is not a finite number in machine
    /// range. Surrounding whitespace is tolerated.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.contains('.') {
            raw.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Self::Float)
        } else {
            raw.parse::<i64>().ok().map(Self::Int)
        }
    }

    fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(_) => None,
        }
    }

    /// True iff the value is an integer >= 2 with no divisor in [2, sqrt(n)].
    pub fn is_prime(&self) -> bool {
        let Some(n) = self.as_int() else {
            return false;
        };
        if n < 2 {
            return false;
        }
        for d in 2..=n.isqrt() {
            if n % d == 0 {
                return false;
            }
        }
        true
    }

    /// True iff the value is a positive integer equal to the sum of its
    /// proper divisors. Divisor-pair scan, O(sqrt(n)).
    pub fn is_perfect(&self) -> bool {
        let Some(n) = self.as_int() else {
            return false;
        };
        if n <= 1 {
            return false;
        }
        let mut sum = 1i64;
        for d in 2..=n.isqrt() {
            if n % d == 0 {
                sum += d;
                let pair = n / d;
                if pair != d {
                    sum += pair;
                }
            }
        }
        sum == n
    }

    /// True iff the sum of the decimal digits of `|n|`, each raised to the
    /// digit count, equals `|n|`. Floats are never Armstrong numbers.
    pub fn is_armstrong(&self) -> bool {
        let Some(n) = self.as_int() else {
            return false;
        };
        let n = n.unsigned_abs();
        let digits = n.to_string();
        let k = digits.len() as u32;
        // u128 accumulator: 19 digits of 9^19 overflows u64
        let sum: u128 = digits
            .bytes()
            .map(|b| ((b - b'0') as u128).pow(k))
            .sum();
        sum == n as u128
    }

    /// Sum of the decimal digit characters of the absolute value's string
    /// form. Non-digit characters (a decimal point, an exponent marker) are
    /// skipped, so a float contributes the digits on both sides of the point.
    pub fn digit_sum(&self) -> u32 {
        let rendered = match self {
            Self::Int(n) => n.unsigned_abs().to_string(),
            Self::Float(f) => f.abs().to_string(),
        };
        rendered.chars().filter_map(|c| c.to_digit(10)).sum()
    }

    /// Remainder-based parity: `v % 2 != 0`, for floats too (4.5 is odd).
    pub fn is_odd(&self) -> bool {
        match self {
            Self::Int(n) => n % 2 != 0,
            Self::Float(f) => f % 2.0 != 0.0,
        }
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

// Serializes back exactly as parsed: an int stays a JSON integer, a float
// stays a JSON float.
impl Serialize for NumberValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

/// Full classification of one parsed number.
///
/// Each predicate is evaluated once; the `properties` list reuses the
/// `is_perfect` result rather than recomputing it.
#[derive(Debug)]
pub struct Classification {
    pub value: NumberValue,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: u32,
}

impl Classification {
    pub fn of(value: NumberValue) -> Self {
        let is_perfect = value.is_perfect();

        // Armstrong/perfect only ever apply to integers (the predicates are
        // false for floats); parity is always appended last.
        let mut properties = Vec::with_capacity(3);
        if value.is_armstrong() {
            properties.push("armstrong");
        }
        if is_perfect {
            properties.push("perfect");
        }
        properties.push(if value.is_odd() { "odd" } else { "even" });

        Self {
            value,
            is_prime: value.is_prime(),
            is_perfect,
            properties,
            digit_sum: value.digit_sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer() {
        assert_eq!(NumberValue::parse("153"), Some(NumberValue::Int(153)));
        assert_eq!(NumberValue::parse("-48"), Some(NumberValue::Int(-48)));
        assert_eq!(NumberValue::parse(" 7 "), Some(NumberValue::Int(7)));
    }

    #[test]
    fn parse_float_on_decimal_point() {
        assert_eq!(NumberValue::parse("4.5"), Some(NumberValue::Float(4.5)));
        assert_eq!(NumberValue::parse("-0.25"), Some(NumberValue::Float(-0.25)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(NumberValue::parse("abc"), None);
        assert_eq!(NumberValue::parse(""), None);
        assert_eq!(NumberValue::parse("  "), None);
        assert_eq!(NumberValue::parse("12a"), None);
        assert_eq!(NumberValue::parse("1.2.3"), None);
    }

    #[test]
    fn parse_rejects_non_finite() {
        // "inf"/"nan" have no decimal point so they take the integer path,
        // but an overflowing float literal must not sneak through either
        assert_eq!(NumberValue::parse("inf"), None);
        assert_eq!(NumberValue::parse("nan"), None);
        assert_eq!(NumberValue::parse("1.0e999"), None);
    }

    #[test]
    fn prime_basics() {
        assert!(NumberValue::Int(2).is_prime());
        assert!(NumberValue::Int(3).is_prime());
        assert!(NumberValue::Int(7919).is_prime());
        assert!(!NumberValue::Int(1).is_prime());
        assert!(!NumberValue::Int(0).is_prime());
        assert!(!NumberValue::Int(-7).is_prime());
        assert!(!NumberValue::Int(153).is_prime());
        assert!(!NumberValue::Int(7917).is_prime());
    }

    #[test]
    fn prime_false_for_floats() {
        assert!(!NumberValue::Float(7.0).is_prime());
    }

    #[test]
    fn perfect_numbers() {
        assert!(NumberValue::Int(6).is_perfect());
        assert!(NumberValue::Int(28).is_perfect());
        assert!(NumberValue::Int(8128).is_perfect());
        assert!(!NumberValue::Int(4).is_perfect());
        assert!(!NumberValue::Int(5).is_perfect());
        assert!(!NumberValue::Int(-6).is_perfect());
        assert!(!NumberValue::Int(0).is_perfect());
        assert!(!NumberValue::Int(1).is_perfect());
        assert!(!NumberValue::Float(6.0).is_perfect());
    }

    #[test]
    fn armstrong_numbers() {
        assert!(NumberValue::Int(153).is_armstrong());
        assert!(NumberValue::Int(9474).is_armstrong());
        assert!(NumberValue::Int(0).is_armstrong());
        assert!(NumberValue::Int(5).is_armstrong());
        assert!(NumberValue::Int(-153).is_armstrong());
        assert!(!NumberValue::Int(123).is_armstrong());
        assert!(!NumberValue::Float(153.0).is_armstrong());
    }

    #[test]
    fn digit_sums() {
        assert_eq!(NumberValue::Int(371).digit_sum(), 11);
        assert_eq!(NumberValue::Int(48).digit_sum(), 12);
        // sign is ignored
        assert_eq!(
            NumberValue::Int(-48).digit_sum(),
            NumberValue::Int(48).digit_sum()
        );
        assert_eq!(NumberValue::Int(0).digit_sum(), 0);
    }

    #[test]
    fn digit_sum_float_skips_decimal_point() {
        assert_eq!(NumberValue::Float(4.5).digit_sum(), 9);
        assert_eq!(NumberValue::Float(-4.5).digit_sum(), 9);
    }

    #[test]
    fn parity() {
        assert!(NumberValue::Int(3).is_odd());
        assert!(NumberValue::Int(-3).is_odd());
        assert!(!NumberValue::Int(4).is_odd());
        assert!(!NumberValue::Int(0).is_odd());
        // remainder semantics for floats: 4.5 % 2.0 == 0.5
        assert!(NumberValue::Float(4.5).is_odd());
        assert!(!NumberValue::Float(4.0).is_odd());
    }

    #[test]
    fn classification_armstrong_odd() {
        let c = Classification::of(NumberValue::Int(153));
        assert_eq!(c.properties, vec!["armstrong", "odd"]);
        assert!(!c.is_prime);
        assert!(!c.is_perfect);
        assert_eq!(c.digit_sum, 9);
    }

    #[test]
    fn classification_perfect_even() {
        let c = Classification::of(NumberValue::Int(6));
        assert_eq!(c.properties, vec!["perfect", "even"]);
        assert!(c.is_perfect);
        assert!(!c.is_prime);
    }

    #[test]
    fn classification_plain_even() {
        let c = Classification::of(NumberValue::Int(4));
        assert_eq!(c.properties, vec!["even"]);
        assert!(!c.is_prime);
        assert!(!c.is_perfect);
    }

    #[test]
    fn classification_float_only_gets_parity() {
        let c = Classification::of(NumberValue::Float(153.0));
        assert_eq!(c.properties, vec!["even"]);
        assert!(!c.is_prime);
        assert!(!c.is_perfect);
    }

    #[test]
    fn serialization_preserves_variant() {
        let int_json = serde_json::to_string(&NumberValue::Int(153)).unwrap();
        assert_eq!(int_json, "153");
        let float_json = serde_json::to_string(&NumberValue::Float(4.5)).unwrap();
        assert_eq!(float_json, "4.5");
    }

    #[test]
    fn display_matches_parse_input() {
        assert_eq!(NumberValue::Int(-48).to_string(), "-48");
        assert_eq!(NumberValue::Float(4.5).to_string(), "4.5");
    }
}
