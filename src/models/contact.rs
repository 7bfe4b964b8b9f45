//! Contact record: a name with its phone numbers and an optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and
/// may repeat; the birthday is replaced on every set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Name identifying the record in a directory
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Optional date of birth
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record with the given name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Format` if the name is blank.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Name identifying this record.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Find a phone by exact text match.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone matching `phone` exactly.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<PhoneNumber> {
        let index = self.position_of(phone)?;
        tracing::debug!("Removing phone {} from {}", phone, self.name);
        Ok(self.phones.remove(index))
    }

    /// Replace `old_phone` with `new_phone`.
    ///
    /// The replacement is validated before anything changes, so a rejected
    /// new phone leaves the record untouched. The new phone is appended
    /// after the old one is removed.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let index = self.position_of(old_phone)?;
        let replacement = PhoneNumber::new(new_phone)?;
        tracing::debug!(
            "Changing phone {} to {} for {}",
            old_phone,
            replacement,
            self.name
        );
        self.phones.remove(index);
        self.phones.push(replacement);
        Ok(())
    }

    /// Parse `birthday` and store it, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        let birthday = Birthday::new(birthday)?;
        tracing::debug!("Setting birthday {} for {}", birthday, self.name);
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The next date on or after `today` matching the birthday's month and day.
    ///
    /// Returns `None` when no birthday is set.
    pub fn next_birthday_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let birthday = self.birthday.as_ref()?;
        let this_year = birthday.occurrence_in(today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            birthday.occurrence_in(today.year() + 1)
        }
    }

    /// Number of days from `today` until the next birthday.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.next_birthday_occurrence(today)
            .map(|next| (next - today).num_days())
    }

    fn position_of(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "none"),
        }
    }
}
