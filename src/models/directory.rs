//! The directory: contact records keyed by name.

use super::contact::ContactRecord;
use crate::domain::BIRTHDAY_FORMAT;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Default number of days ahead scanned for upcoming birthdays.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// A birthday falling within the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Date to congratulate on, moved off weekends to the following Monday
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// All contact records of one user, unique by name.
///
/// Records are kept in insertion order; replacing a record keeps its slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<ContactRecord>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records, later duplicates replacing earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = ContactRecord>) -> Self {
        let mut directory = Self::new();
        for record in records {
            if let Some(previous) = directory.add_record(record) {
                tracing::warn!("Duplicate record '{}' replaced", previous.name());
            }
        }
        directory
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        match self.position_of(record.name()) {
            Some(index) => {
                tracing::debug!("Replacing record {}", record.name());
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                tracing::debug!("Adding record {}", record.name());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record called `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self
            .position_of(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))?;
        tracing::debug!("Deleting record {}", name);
        Ok(self.records.remove(index))
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays whose next occurrence is within `window_days` of `today`.
    ///
    /// The window check uses the real occurrence; a Saturday or Sunday
    /// occurrence is then reported on the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let occurrence = record.next_birthday_occurrence(today)?;
                let days_until = (occurrence - today).num_days();
                if !(0..=i64::from(window_days)).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    date: shift_off_weekend(occurrence),
                })
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Move a Saturday or Sunday to the following Monday.
fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "Address book is empty.");
        }
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
