// 📒 Address Book - the contact store
// Name → Record, one record per name, plus the upcoming-birthdays query

use crate::calendar;
use crate::entities::Record;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;

// ============================================================================
// ADDRESS BOOK
// ============================================================================

/// Records keyed by the name's string value, iterated in name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by the record's name
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove by exact name; true if something was removed
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.keys().map(String::as_str).collect()
    }

    /// Upcoming birthdays relative to the local calendar date
    pub fn get_upcoming_birthdays(&self) -> BirthdayPlan {
        self.upcoming_birthdays_from(Local::now().date_naive())
    }

    /// Birthdays whose next anniversary falls in `[today, today + 7)`,
    /// grouped by congratulation weekday (weekends moved to Monday)
    pub fn upcoming_birthdays_from(&self, today: NaiveDate) -> BirthdayPlan {
        let mut plan = BirthdayPlan::default();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let next = calendar::next_anniversary(birthday.as_date(), today);
            if !calendar::within_lookahead(next, today) {
                continue;
            }

            let day = calendar::congratulation_day(next);
            plan.push(day, record.name().as_str());
        }

        plan
    }
}

// ============================================================================
// BIRTHDAY PLAN
// ============================================================================

/// Weekday → names celebrating that day.
///
/// Names keep the order they were added; weekdays iterate Monday..Sunday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayPlan {
    /// Keyed by days from Monday; holds the weekday name and the names
    days: BTreeMap<u32, (String, Vec<String>)>,
}

impl BirthdayPlan {
    fn push(&mut self, day: NaiveDate, name: &str) {
        self.days
            .entry(day.weekday().num_days_from_monday())
            .or_insert_with(|| (calendar::weekday_name(day), Vec::new()))
            .1
            .push(name.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Names for a weekday given by its English name ("Monday", ...)
    pub fn get(&self, weekday_name: &str) -> Option<&[String]> {
        self.days
            .values()
            .find(|(day, _)| day == weekday_name)
            .map(|(_, names)| names.as_slice())
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<&[String]> {
        self.days
            .get(&weekday.num_days_from_monday())
            .map(|(_, names)| names.as_slice())
    }

    /// (weekday name, names) pairs, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.days
            .values()
            .map(|(day, names)| (day.as_str(), names.as_slice()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
