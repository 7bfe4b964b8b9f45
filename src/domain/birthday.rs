//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format used for birthdays, both for input and display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the shape is checked first
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A calendar date of birth, entered as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the pattern or does not name a real calendar date from year 1 onwards.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        if !BIRTHDAY_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize in the same DD.MM.YYYY form users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
