// 🧾 Field Validators - Name, Phone, Birthday
// Each field is its own value type; construction is the only way in,
// so a held value is always valid.

use crate::error::{BotError, BotResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical textual format for birthdays
pub const DATE_FORMAT: &str = "%d.%m.%Y";

pub const PHONE_LENGTH: usize = 10;

// ============================================================================
// NAME
// ============================================================================

/// Contact name - non-empty, trimmed, immutable
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> BotResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(BotError::validation("Name cannot be empty."));
        }
        Ok(Name(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PHONE
// ============================================================================

/// Phone number - exactly 10 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> BotResult<Self> {
        let all_digits = value.chars().all(|c| c.is_ascii_digit());
        if !all_digits || value.len() != PHONE_LENGTH {
            return Err(BotError::validation("Phone must contain 10 digits."));
        }
        Ok(Phone(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// BIRTHDAY
// ============================================================================

/// Birthday - a calendar date written as `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Accepts only zero-padded `DD.MM.YYYY` naming a real calendar date
    pub fn new(value: &str) -> BotResult<Self> {
        parse_strict_date(value)
            .map(Birthday)
            .ok_or_else(|| BotError::validation("Invalid date format. Use DD.MM.YYYY"))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Birthday(date)
    }

    /// Calendar date for arithmetic
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}

/// Shape check first: chrono alone accepts unpadded days and months
fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

// ============================================================================
// SHARED TRAIT IMPLS
// ============================================================================

macro_rules! field_impls {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = BotError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = BotError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $ty::new(&value)
            }
        }
    };
}

field_impls!(Name);
field_impls!(Phone);
field_impls!(Birthday);

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let name = Name::new("  Alice ").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(
            Name::new("   "),
            Err(BotError::validation("Name cannot be empty."))
        );
        assert!(Name::new("").is_err());
    }

    #[test]
    fn test_phone_accepts_ten_digits() {
        for raw in ["0123456789", "5555555555", "9876543210"] {
            let phone = Phone::new(raw).unwrap();
            assert_eq!(phone.as_str(), raw);
        }
    }

    #[test]
    fn test_phone_rejects_bad_input() {
        for raw in ["123", "12345678901", "12345abcde", "+380501234", "", "１２３４５６７８９０"] {
            assert!(Phone::new(raw).is_err(), "{raw} should be rejected");
        }
        assert_eq!(
            Phone::new("123").unwrap_err().user_message(),
            "Phone must contain 10 digits."
        );
    }

    #[test]
    fn test_birthday_accepts_valid_dates() {
        let bday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(bday.to_string(), "29.02.2000");
        assert_eq!(bday.as_date(), NaiveDate::from_ymd_opt(2000, 2, 29).unwrap());
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        for raw in [
            "1.2.2000",
            "2000-02-01",
            "01/02/2000",
            "01.02.00",
            "31.02.2000",
            "29.02.2001",
            "00.01.2000",
            "15.13.2000",
            "aa.bb.cccc",
            "",
        ] {
            assert!(Birthday::new(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_birthday_round_trip_is_idempotent() {
        let bday = Birthday::new("05.11.1990").unwrap();
        let again = Birthday::from_date(bday.as_date());
        assert_eq!(bday, again);
        assert_eq!(again.to_string(), "05.11.1990");
    }

    #[test]
    fn test_deserialize_revalidates() {
        let ok: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(ok.as_str(), "0501234567");

        let bad: Result<Phone, _> = serde_json::from_str("\"123\"");
        assert!(bad.is_err());

        let bad_date: Result<Birthday, _> = serde_json::from_str("\"2000-01-01\"");
        assert!(bad_date.is_err());
    }
}
