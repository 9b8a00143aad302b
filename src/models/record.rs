//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact in the address book.
///
/// The name is fixed at creation. Phones form a plain sequence in the order
/// they were added; the same number may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Birthday,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: Birthday::absent(),
        })
    }

    /// Create a record with initial phones and an optional birthday.
    ///
    /// Phones are validated in the order given; the first invalid field
    /// aborts creation.
    pub fn with_fields<I, S>(name: &str, phones: I, birthday: Option<&str>) -> BookResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = ContactName::new(name)?;
        let phones = phones
            .into_iter()
            .map(|p| PhoneNumber::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = birthday.map(Birthday::parse).transpose()?.unwrap_or_default();

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Birthday {
        self.birthday
    }

    /// Append a phone number. Duplicates are not rejected.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The new number is appended and the first occurrence of the old one is
    /// then removed, so after an edit the new number sits at the end of the
    /// sequence rather than in the old number's slot. On any error the
    /// record is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let old = PhoneNumber::new(old)?;
        if self.find_phone(old.as_str()).is_none() {
            return Err(BookError::PhoneNotFound(old.into_inner()));
        }
        self.add_phone(new)?;
        self.remove_phone(old.as_str())
    }

    /// Find the first phone equal to `phone`.
    ///
    /// Absence is a normal outcome, and text that is not a valid phone number
    /// simply matches nothing.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the birthday. The absence marker clears it.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Birthday::parse(birthday)?;
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact: {}, tel.: {}, birthday: {}",
            self.name,
            self.phones_display(),
            self.birthday
        )
    }
}
