use crate::commands::{CmdResult, ID_PROMPT};
use crate::error::{AddressBookError, Result};
use crate::model::AddressBook;
use crate::prompt::Prompter;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Removes the first person with the entered id after an exact `y`
/// confirmation. Any other answer leaves the book alone.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    prompter: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let id = prompter.ask_single_id(ID_PROMPT, "delete")?;
    let index = book
        .position_of(id)
        .ok_or(AddressBookError::PersonNotFound(id))?;

    let confirm = prompter.ask("Are you sure you want to delete it (y/n): ", "confirmation")?;
    if confirm != "y" {
        debug!(id, answer = %confirm, "deletion not confirmed");
        return Ok(CmdResult::default());
    }

    let removed = book.people.remove(index);
    info!(id, position = index, "deleted person");
    Ok(CmdResult::default()
        .with_affected_people(vec![removed])
        .modified())
}
