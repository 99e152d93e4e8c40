use crate::domain::cell::CellValue;
use serde::Serialize;
use std::fmt;

/// Country calling code added to numbers that carry no prefix.
pub const COUNTRY_PREFIX: &str = "55";
/// Shortest digit run still treated as a phone number.
pub const MIN_DIGITS: usize = 8;

const HEADER_WORD: &str = "telefone";

/// Digit-only phone number starting with `55` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalPhone(String);

impl CanonicalPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// A column label such as `Telefone 2` mixed in with the data rows.
    HeaderLabel,
    TooShort { digits: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::HeaderLabel => f.write_str("header label"),
            Rejection::TooShort { digits } => {
                write!(f, "too short ({digits} digits, need {MIN_DIGITS})")
            }
        }
    }
}

pub fn normalize_phone(value: &CellValue) -> Result<CanonicalPhone, Rejection> {
    normalize_phone_text(&value.to_text())
}

pub fn normalize_phone_text(value: &str) -> Result<CanonicalPhone, Rejection> {
    let trimmed = value.trim();
    if is_header_label(trimmed) {
        return Err(Rejection::HeaderLabel);
    }

    let digits: String = trimmed.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.len() < MIN_DIGITS {
        return Err(Rejection::TooShort {
            digits: digits.len(),
        });
    }

    if digits.starts_with(COUNTRY_PREFIX) || digits.starts_with('0') {
        return Ok(CanonicalPhone(digits));
    }

    let mut out = String::with_capacity(COUNTRY_PREFIX.len() + digits.len());
    out.push_str(COUNTRY_PREFIX);
    out.push_str(&digits);
    Ok(CanonicalPhone(out))
}

/// Matches `Telefone`, optional whitespace, then one or more digits, ignoring
/// case. The input is expected to be trimmed already.
pub fn is_header_label(value: &str) -> bool {
    let Some(prefix) = value.get(..HEADER_WORD.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(HEADER_WORD) {
        return false;
    }

    let rest = value[HEADER_WORD.len()..].trim_start();
    !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{is_header_label, normalize_phone, normalize_phone_text, Rejection};
    use crate::domain::cell::CellValue;

    #[test]
    fn adds_country_prefix_to_local_numbers() {
        let value = normalize_phone_text("(11) 91234-5678").unwrap();
        assert_eq!(value.as_str(), "5511912345678");
    }

    #[test]
    fn keeps_numbers_with_trunk_zero() {
        let value = normalize_phone_text("055 3344-5566").unwrap();
        assert_eq!(value.as_str(), "0553344566");
    }

    #[test]
    fn keeps_numbers_already_prefixed() {
        let value = normalize_phone_text("5511999998888").unwrap();
        assert_eq!(value.as_str(), "5511999998888");

        let doubled = normalize_phone_text("+55 055 1199999-8888").unwrap();
        assert_eq!(doubled.as_str(), "5505511999998888");
    }

    #[test]
    fn rejects_short_digit_runs() {
        assert_eq!(
            normalize_phone_text("1234"),
            Err(Rejection::TooShort { digits: 4 })
        );
        assert_eq!(
            normalize_phone_text("ramal 1234567"),
            Err(Rejection::TooShort { digits: 7 })
        );
        assert!(normalize_phone_text("12345678").is_ok());
    }

    #[test]
    fn rejects_header_labels() {
        for raw in [
            "Telefone 3",
            "telefone12",
            "TELEFONE  1",
            "  Telefone 4  ",
            "Telefone\t7",
        ] {
            assert_eq!(normalize_phone_text(raw), Err(Rejection::HeaderLabel), "{raw}");
        }
    }

    #[test]
    fn header_guard_requires_digits_only_after_word() {
        assert!(!is_header_label("Telefone"));
        assert!(!is_header_label("Telefone 1a"));
        assert!(!is_header_label("Meu Telefone 1"));
        assert!(!is_header_label("Tel 1"));
        assert!(is_header_label("Telefone99999999"));
        // long enough to pass the length gate, but still a header
        assert_eq!(
            normalize_phone_text("Telefone 123456789"),
            Err(Rejection::HeaderLabel)
        );
    }

    #[test]
    fn header_guard_handles_multibyte_text() {
        assert!(!is_header_label("Teléfono 1"));
        assert!(!is_header_label("☎"));
    }

    #[test]
    fn extra_text_is_stripped_not_rejected() {
        let value = normalize_phone_text("Telefone: (85) 3344-5566").unwrap();
        assert_eq!(value.as_str(), "558533445566");
    }

    #[test]
    fn numeric_cells_normalize_like_text() {
        let int = normalize_phone(&CellValue::Int(85988887777)).unwrap();
        assert_eq!(int.as_str(), "5585988887777");

        let float = normalize_phone(&CellValue::Float(85988887777.0)).unwrap();
        assert_eq!(float, int);
    }

    #[test]
    fn accepted_values_are_fixed_points() {
        for raw in [
            "(11) 91234-5678",
            "055 3344-5566",
            "5511999998888",
            "12345678",
            "  +1 (415) 555-1212 ",
        ] {
            let first = normalize_phone_text(raw).unwrap();
            let second = normalize_phone_text(first.as_str()).unwrap();
            assert_eq!(first, second);
            assert!(first.as_str().starts_with("55") || first.as_str().starts_with('0'));
            assert!(first.as_str().chars().all(|ch| ch.is_ascii_digit()));
        }
    }

    #[test]
    fn empty_and_blank_values_are_too_short() {
        assert_eq!(
            normalize_phone(&CellValue::Empty),
            Err(Rejection::TooShort { digits: 0 })
        );
        assert_eq!(
            normalize_phone_text("   "),
            Err(Rejection::TooShort { digits: 0 })
        );
    }
}
