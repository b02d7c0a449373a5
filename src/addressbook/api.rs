//! # API Facade
//!
//! Every tool goes through [`AddressBookApi`]. It owns the store and wraps each
//! command in the same pass: load, decode, run the command, encode, save.
//!
//! ## Missing files
//!
//! The editing tools (`add`, `delete`, `update`) start from an empty book when
//! the file does not exist yet, after telling the user it will be created.
//! Listing a missing file is an error.
//!
//! ## When the file is written
//!
//! - The command succeeds: always, even if nothing changed (a declined delete
//!   still rewrites the file).
//! - The id was not found: the unchanged book is written, then the
//!   error is returned.
//! - Any other error: nothing is written.
//!
//! Generic over [`BookStore`], so tests run against `InMemoryStore`.

use crate::commands::{self, CmdResult};
use crate::error::{AddressBookError, Result};
use crate::model::AddressBook;
use crate::prompt::Prompter;
use crate::store::BookStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct AddressBookApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> AddressBookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_person<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CmdResult> {
        self.edit(prompter, commands::add::run)
    }

    pub fn delete_person<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CmdResult> {
        self.edit(prompter, commands::delete::run)
    }

    pub fn update_person<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<CmdResult> {
        self.edit(prompter, commands::update::run)
    }

    pub fn list_people<W: Write>(&self, out: &mut W) -> Result<CmdResult> {
        let bytes = self
            .store
            .load()?
            .ok_or_else(|| AddressBookError::FileNotFound {
                path: self.store.path().to_path_buf(),
            })?;
        let book = AddressBook::from_bytes(&bytes)?;
        commands::list::run(&book, out)
    }

    fn edit<R, W, F>(&mut self, prompter: &mut Prompter<R, W>, command: F) -> Result<CmdResult>
    where
        R: BufRead,
        W: Write,
        F: FnOnce(&mut AddressBook, &mut Prompter<R, W>) -> Result<CmdResult>,
    {
        let mut book = self.open_for_edit(prompter)?;
        match command(&mut book, prompter) {
            Ok(result) => {
                self.save(&book)?;
                Ok(result)
            }
            Err(err @ AddressBookError::PersonNotFound(_)) => {
                self.save(&book)?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn open_for_edit<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<AddressBook> {
        match self.store.load()? {
            Some(bytes) => AddressBook::from_bytes(&bytes),
            None => {
                prompter.say(&format!(
                    "{}: File not found. Creating new file after address is input.",
                    self.store.path().display()
                ))?;
                Ok(AddressBook::default())
            }
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let bytes = book.to_bytes()?;
        debug!(people = book.people.len(), "writing address book");
        self.store.save(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Person, PhoneType};
    use crate::store::memory::fixtures::{sample_book, sample_store};
    use crate::store::memory::InMemoryStore;
    use std::io::Cursor;

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: TestPrompter) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn add_to_missing_book_creates_it() {
        let mut api = AddressBookApi::new(InMemoryStore::new());
        let mut p = prompter("1\nAda\n\n555\nhome\n\n");
        api.add_person(&mut p).unwrap();

        let out = output(p);
        assert!(out.starts_with("memory.book: File not found. Creating new file"));
        let book = api.store().book().unwrap();
        assert_eq!(
            book.people,
            vec![Person::new(1, "Ada", "").with_phone("555", PhoneType::Home)]
        );
    }

    #[test]
    fn add_appends_to_existing_book() {
        let mut api = AddressBookApi::new(sample_store());
        let mut p = prompter("4\nFour\n\n\n");
        api.add_person(&mut p).unwrap();

        assert!(!output(p).contains("File not found"));
        let ids: Vec<i32> = api.store().book().unwrap().people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn declined_delete_still_rewrites_identical_bytes() {
        let store = sample_store();
        let before = store.bytes().unwrap().to_vec();
        let mut api = AddressBookApi::new(store);
        api.delete_person(&mut prompter("2\nn\n")).unwrap();

        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().bytes().unwrap(), before.as_slice());
    }

    #[test]
    fn confirmed_delete_is_saved() {
        let mut api = AddressBookApi::new(sample_store());
        api.delete_person(&mut prompter("1\ny\n")).unwrap();
        let ids: Vec<i32> = api.store().book().unwrap().people.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn not_found_writes_unchanged_book_then_fails() {
        let mut api = AddressBookApi::new(sample_store());
        let err = api.update_person(&mut prompter("99\n")).unwrap_err();

        assert!(matches!(err, AddressBookError::PersonNotFound(99)));
        assert_eq!(api.store().save_count(), 1);
        assert_eq!(api.store().book().unwrap(), sample_book());
    }

    #[test]
    fn prompt_errors_do_not_write() {
        let mut api = AddressBookApi::new(sample_store());
        assert!(api.add_person(&mut prompter("oops\n")).is_err());
        assert!(api.delete_person(&mut prompter("1 2\n")).is_err());
        assert!(api.update_person(&mut prompter("1\n")).is_err());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn corrupt_book_is_not_touched() {
        let mut api = AddressBookApi::new(InMemoryStore::with_bytes(vec![0x0a, 0x0a, 0x01]));
        let err = api.add_person(&mut prompter("1\nx\n\n\n")).unwrap_err();
        assert!(matches!(err, AddressBookError::Decode(_)));
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn update_is_saved() {
        let mut api = AddressBookApi::new(sample_store());
        api.update_person(&mut prompter("3\nThree\nthree@example.com\n"))
            .unwrap();
        let book = api.store().book().unwrap();
        assert_eq!(book.people[2], Person::new(3, "Three", "three@example.com"));
    }

    #[test]
    fn list_requires_existing_book() {
        let api = AddressBookApi::new(InMemoryStore::new());
        let err = api.list_people(&mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, AddressBookError::FileNotFound { .. }));
    }

    #[test]
    fn list_prints_and_never_saves() {
        let api = AddressBookApi::new(sample_store());
        let mut out = Vec::new();
        let result = api.list_people(&mut out).unwrap();
        assert_eq!(result.affected_people.len(), 3);
        assert_eq!(api.store().save_count(), 0);
        assert!(String::from_utf8(out).unwrap().starts_with("Person ID: 1\n"));
    }
}
