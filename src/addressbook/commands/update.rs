use crate::commands::list::write_person;
use crate::commands::{CmdResult, ID_PROMPT};
use crate::error::{AddressBookError, Result};
use crate::model::{AddressBook, PhoneType};
use crate::prompt::{Prompter, TypeAnswer};
use std::io::{BufRead, Write};
use tracing::info;

/// Edits the first person with the entered id in place. Blank answers keep
/// the current value. Phones can be changed but not added or removed.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    prompter: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let id = prompter.ask_single_id(ID_PROMPT, "update")?;
    let person = book
        .find_mut(id)
        .ok_or(AddressBookError::PersonNotFound(id))?;

    write_person(prompter.writer(), person)?;

    let name = prompter.ask(
        &format!(
            "Enter new person's name ({}), press enter to skip: ",
            person.name
        ),
        "name",
    )?;
    if !name.is_empty() {
        person.name = name;
    }

    let email = prompter.ask(
        &format!(
            "Enter new person's email ({}), press enter to skip: ",
            person.email
        ),
        "email",
    )?;
    if !email.is_empty() {
        person.email = email;
    }

    for phone in person.phones.iter_mut() {
        let number = prompter.ask(
            &format!(
                "Enter a new phone number ({}), press enter to skip: ",
                phone.number
            ),
            "phone number",
        )?;
        if !number.is_empty() {
            phone.number = number;
        }

        let answer = prompter.ask_phone_type(&format!(
            "Is this a mobile, home, or work phone? ({}) press enter to skip: ",
            phone.r#type().as_str()
        ))?;
        match answer {
            TypeAnswer::Known(phone_type) => phone.set_type(phone_type),
            TypeAnswer::Blank => {}
            // An unrecognized answer does not keep the old type.
            TypeAnswer::Unrecognized(answer) => {
                prompter.warn_unknown_type(&answer)?;
                phone.set_type(PhoneType::Unknown);
            }
        }
    }

    info!(id, "updated person");
    Ok(CmdResult::default()
        .with_affected_people(vec![person.clone()])
        .modified())
}
