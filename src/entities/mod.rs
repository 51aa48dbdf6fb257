// Entity Models
//
// A record's name is its identity; phones and birthday are values that
// change in place over the record's lifetime.

pub mod record;

pub use record::{Record, EMPTY_PLACEHOLDER};
