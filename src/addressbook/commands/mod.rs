//! One module per tool. Each `run` works on a decoded [`AddressBook`] that the
//! caller loaded, and never touches storage itself.
//!
//! [`AddressBook`]: crate::model::AddressBook

use crate::model::Person;

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

pub(crate) const ID_PROMPT: &str = "Enter person ID number: ";

#[derive(Debug, Default)]
pub struct CmdResult {
    /// People added, removed, updated or listed, in book order.
    pub affected_people: Vec<Person>,
    /// Whether the in-memory book differs from what was loaded.
    pub modified: bool,
}

impl CmdResult {
    pub fn with_affected_people(mut self, people: Vec<Person>) -> Self {
        self.affected_people = people;
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }
}
