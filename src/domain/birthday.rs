//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format string for the `DD.MM.YYYY` text form.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Literal text meaning "no birthday set".
pub const ABSENT_MARKER: &str = "None";

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").expect("date pattern is a valid regex"));

/// A contact's birthday, which may be absent.
///
/// The text form is `DD.MM.YYYY`; the literal `None` parses to an absent
/// birthday instead of failing.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
///
/// let absent = Birthday::parse("None").unwrap();
/// assert!(absent.is_absent());
/// assert_eq!(absent.to_string(), "None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Parse a birthday from user text.
    ///
    /// The first `DD.MM.YYYY` pattern found anywhere in the text is read
    /// day first, month second, four-digit year last.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` when no pattern is present or
    /// the matched text is not a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if text == ABSENT_MARKER {
            return Ok(Self::absent());
        }

        let invalid = || ValidationError::InvalidDate(text.to_string());
        let matched = DATE_PATTERN.find(text).ok_or_else(invalid)?;
        let date = NaiveDate::parse_from_str(matched.as_str(), DATE_FORMAT).map_err(|_| invalid())?;

        Ok(Self(Some(date)))
    }

    /// A birthday that is not set.
    pub const fn absent() -> Self {
        Self(None)
    }

    /// The birth date, if one is set.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Whether no birthday is set.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => write!(f, "{}", ABSENT_MARKER),
        }
    }
}

// Serde support - `null` when absent, otherwise the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(_) => serializer.serialize_some(&self.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

// Serde support - deserialize with the same validation as user input
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Birthday::parse(&s).map_err(serde::de::Error::custom),
            None => Ok(Birthday::absent()),
        }
    }
}
