use crate::commands::{CmdResult, ID_PROMPT};
use crate::error::Result;
use crate::model::{AddressBook, Person, PhoneNumber, PhoneType};
use crate::prompt::{Prompter, TypeAnswer};
use std::io::{BufRead, Write};
use tracing::info;

/// Prompts for a new person and appends it to the end of the book.
/// Ids are not checked for duplicates.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    prompter: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let person = prompt_for_person(prompter)?;
    info!(id = person.id, phones = person.phones.len(), "adding person");
    book.people.push(person.clone());
    Ok(CmdResult::default()
        .with_affected_people(vec![person])
        .modified())
}

fn prompt_for_person<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Person> {
    let id = prompter.ask_id(ID_PROMPT)?;
    let name = prompter.ask("Enter name: ", "name")?;
    let email = prompter.ask("Enter email address (blank for none): ", "email")?;
    let mut person = Person::new(id, name, email);

    loop {
        let number = prompter.ask(
            "Enter a phone number (or leave blank to finish): ",
            "phone number",
        )?;
        if number.is_empty() {
            break;
        }

        let phone_type = match prompter.ask_phone_type("Is this a mobile, home, or work phone? ")? {
            TypeAnswer::Known(phone_type) => phone_type,
            TypeAnswer::Blank => {
                prompter.warn_unknown_type("")?;
                PhoneType::Unknown
            }
            TypeAnswer::Unrecognized(answer) => {
                prompter.warn_unknown_type(&answer)?;
                PhoneType::Unknown
            }
        };
        person.phones.push(PhoneNumber::new(number, phone_type));
    }

    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::store::memory::fixtures::sample_book;
    use std::io::Cursor;

    fn run_with(book: &mut AddressBook, input: &str) -> (Result<CmdResult>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(book, &mut prompter);
        let out = String::from_utf8(prompter.into_parts().1).unwrap();
        (result, out)
    }

    #[test]
    fn appends_person_with_phones() {
        let mut book = sample_book();
        let input = "4\n  Grace Hopper \ngrace@navy.mil\n555-1\nmobile\n555-2\nwork\n\n";
        let (result, _) = run_with(&mut book, input);
        let result = result.unwrap();

        assert!(result.modified);
        assert_eq!(book.people.len(), 4);
        let added = &book.people[3];
        assert_eq!(added.id, 4);
        assert_eq!(added.name, "Grace Hopper");
        assert_eq!(added.email, "grace@navy.mil");
        assert_eq!(
            added.phones,
            vec![
                PhoneNumber::new("555-1", PhoneType::Mobile),
                PhoneNumber::new("555-2", PhoneType::Work),
            ]
        );
        assert_eq!(result.affected_people, vec![added.clone()]);
    }

    #[test]
    fn empty_name_and_email_are_allowed() {
        let mut book = AddressBook::default();
        let (result, _) = run_with(&mut book, "9\n\n\n\n");
        result.unwrap();
        assert_eq!(book.people, vec![Person::new(9, "", "")]);
    }

    #[test]
    fn duplicate_ids_are_appended() {
        let mut book = sample_book();
        run_with(&mut book, "1\nagain\n\n\n").0.unwrap();
        assert_eq!(book.people.len(), 4);
        assert_eq!(book.people[3].name, "again");
        assert_eq!(book.people[0].name, "123");
    }

    #[test]
    fn unrecognized_type_warns_and_keeps_unknown() {
        let mut book = AddressBook::default();
        let (result, out) = run_with(&mut book, "1\nx\n\n555\nMobile\n556\n\n\n");
        result.unwrap();

        let phones = &book.people[0].phones;
        assert_eq!(phones[0].r#type(), PhoneType::Unknown);
        assert_eq!(phones[1].r#type(), PhoneType::Unknown);
        assert!(out.contains("Unknown phone type \"Mobile\". Using default."));
        assert!(out.contains("Unknown phone type \"\". Using default."));
    }

    #[test]
    fn prompts_in_order() {
        let mut book = AddressBook::default();
        let (_, out) = run_with(&mut book, "1\nn\ne\n555\nhome\n\n");
        let expected = [
            "Enter person ID number: ",
            "Enter name: ",
            "Enter email address (blank for none): ",
            "Enter a phone number (or leave blank to finish): ",
            "Is this a mobile, home, or work phone? ",
            "Enter a phone number (or leave blank to finish): ",
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn non_numeric_id_aborts_without_change() {
        let mut book = sample_book();
        let (result, _) = run_with(&mut book, "abc\nname\n\n\n");
        assert!(matches!(
            result.unwrap_err(),
            AddressBookError::InvalidId { .. }
        ));
        assert_eq!(book, sample_book());
    }

    #[test]
    fn end_of_input_aborts_without_change() {
        let mut book = sample_book();
        let (result, _) = run_with(&mut book, "5\nname\nmail\n555\n");
        assert!(matches!(
            result.unwrap_err(),
            AddressBookError::UnexpectedEof { field: "phone type" }
        ));
        assert_eq!(book.people.len(), 3);
    }
}
