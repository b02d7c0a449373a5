use crate::commands::CmdResult;
use crate::error::{AddressBookError, Result};
use crate::model::{AddressBook, Person};
use std::io::Write;

/// Writes one block per person, in book order.
pub fn run<W: Write>(book: &AddressBook, out: &mut W) -> Result<CmdResult> {
    for person in &book.people {
        write_person(out, person).map_err(AddressBookError::Output)?;
    }
    out.flush().map_err(AddressBookError::Output)?;
    Ok(CmdResult::default().with_affected_people(book.people.clone()))
}

/// Phones without a known type are written as the bare number.
pub fn write_person<W: Write>(out: &mut W, person: &Person) -> std::io::Result<()> {
    writeln!(out, "Person ID: {}", person.id)?;
    writeln!(out, "  Name: {}", person.name)?;
    if !person.email.is_empty() {
        writeln!(out, "  E-mail address: {}", person.email)?;
    }
    for phone in &person.phones {
        match phone.r#type().label() {
            Some(label) => writeln!(out, "  {} {}", label, phone.number)?,
            None => writeln!(out, "{}", phone.number)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhoneType;
    use crate::store::memory::fixtures::sample_book;

    fn listing(book: &AddressBook) -> String {
        let mut out = Vec::new();
        run(book, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn lists_people_in_order() {
        let out = listing(&sample_book());
        assert_eq!(
            out,
            "Person ID: 1\n  Name: 123\n  E-mail address: 123@gmail.com\n  Mobile phone #: 123456789\n\
             Person ID: 2\n  Name: 234\n  E-mail address: 234@gmail.com\n\
             Person ID: 3\n  Name: 345\n  E-mail address: 345@gmail.com\n"
        );
        assert_eq!(out.matches("Person ID:").count(), 3);
    }

    #[test]
    fn empty_email_has_no_line() {
        let book = AddressBook::new(vec![Person::new(1, "nomail", "")]);
        let out = listing(&book);
        assert!(!out.contains("E-mail address"));
        assert_eq!(out, "Person ID: 1\n  Name: nomail\n");
    }

    #[test]
    fn labels_each_phone_type() {
        let person = Person::new(1, "p", "")
            .with_phone("m", PhoneType::Mobile)
            .with_phone("h", PhoneType::Home)
            .with_phone("w", PhoneType::Work)
            .with_phone("u", PhoneType::Unknown);
        let out = listing(&AddressBook::new(vec![person]));
        assert!(out.contains("  Mobile phone #: m\n"));
        assert!(out.contains("  Home phone #: h\n"));
        assert!(out.contains("  Work phone #: w\n"));
        assert!(out.ends_with("\nu\n"));
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = {
            let mut out = Vec::new();
            let result = run(&AddressBook::default(), &mut out).unwrap();
            assert!(out.is_empty());
            result
        };
        assert!(result.affected_people.is_empty());
        assert!(!result.modified);
    }
}
