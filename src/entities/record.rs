// 👤 Record Entity - one contact
//
// Identity is the name (never changes once created).
// Values are the phones and the birthday (mutated in place).

use crate::error::BotResult;
use crate::fields::{Birthday, Name, Phone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for an empty phone list or an unset birthday
pub const EMPTY_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    /// Ordered, duplicates allowed
    #[serde(default)]
    phones: Vec<Phone>,

    /// At most one; overwritten on re-entry
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> BotResult<Self> {
        Ok(Record {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append
    pub fn add_phone(&mut self, phone: &str) -> BotResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first exact match
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new` in place.
    ///
    /// `new` is validated before the lookup, so a bad replacement is an error
    /// even when `old` is absent. `Ok(false)` means `old` was not found.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BotResult<bool> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_birthday(&mut self, text: &str) -> BotResult<()> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }

    /// Phones joined with "; ", or None when there are none
    pub fn phones_line(&self) -> Option<String> {
        if self.phones.is_empty() {
            return None;
        }
        Some(
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones_line()
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
