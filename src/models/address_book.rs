//! Address book: every contact record, keyed by name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use crate::scheduling::{self, UpcomingBirthday};
use chrono::{Local, NaiveDate};
use indexmap::IndexMap;

/// A collection of records keyed by contact name.
///
/// At most one record exists per name. Iteration follows insertion order,
/// and deleting a record keeps the order of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an address book from records, rejecting repeated names.
    pub fn from_records<I>(records: I) -> BookResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut book = Self::new();
        for record in records {
            book.add(record)?;
        }
        Ok(book)
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateName` if a record with this name exists.
    pub fn add(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().to_string();
        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateName(key));
        }
        self.records.insert(key, record);
        Ok(())
    }

    /// Overwrite the stored record that has the same name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no such record exists.
    pub fn update(&mut self, record: Record) -> BookResult<()> {
        let slot = self
            .records
            .get_mut(record.name().as_str())
            .ok_or_else(|| BookError::RecordNotFound(record.name().to_string()))?;
        *slot = record;
        Ok(())
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Look up a record by name for in-place mutation.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Apply a fallible change to the named record.
    ///
    /// The change runs on a copy which replaces the stored record only when
    /// `change` succeeds, so a failed change leaves the book untouched.
    pub fn modify<F, T>(&mut self, name: &str, change: F) -> BookResult<T>
    where
        F: FnOnce(&mut Record) -> BookResult<T>,
    {
        let stored = self.find_mut(name)?;
        let mut draft = stored.clone();
        let value = change(&mut draft)?;
        *stored = draft;
        Ok(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the named record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .shift_remove(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Contacts to congratulate within `window_days` of the local date.
    pub fn upcoming_birthdays(&self, window_days: u32) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(Local::now().date_naive(), window_days)
    }

    /// Contacts to congratulate within `window_days` of `today`.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        scheduling::upcoming_birthdays(self, today, window_days)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
