//! Line-oriented prompting.
//!
//! A [`Prompter`] owns one reader and one writer. Every question writes its
//! prompt (no trailing newline), flushes, then consumes exactly one line of
//! input. Answers are returned trimmed. Running out of input is always an
//! error: nothing a command does is valid on a half-answered form.

use crate::error::{AddressBookError, Result};
use crate::model::PhoneType;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What was typed at a phone type prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnswer {
    Blank,
    Known(PhoneType),
    Unrecognized(String),
}

impl TypeAnswer {
    fn parse(answer: String) -> Self {
        if answer.is_empty() {
            return Self::Blank;
        }
        match PhoneType::from_answer(&answer) {
            Some(phone_type) => Self::Known(phone_type),
            None => Self::Unrecognized(answer),
        }
    }
}

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Writes `prompt` and returns the trimmed answer line.
    pub fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AddressBookError::UnexpectedEof { field });
        }
        Ok(line.trim().to_string())
    }

    /// Reads every whitespace-separated id on one answer line.
    pub fn ask_ids(&mut self, prompt: &str) -> Result<Vec<i32>> {
        let answer = self.ask(prompt, "person ID number")?;
        answer
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|_| AddressBookError::InvalidId {
                    input: token.to_string(),
                })
            })
            .collect()
    }

    /// Exactly one id; anything else is an invalid id.
    pub fn ask_id(&mut self, prompt: &str) -> Result<i32> {
        let answer = self.ask(prompt, "person ID number")?;
        answer
            .parse::<i32>()
            .map_err(|_| AddressBookError::InvalidId { input: answer })
    }

    /// Exactly one id for an operation that targets a single person.
    pub fn ask_single_id(&mut self, prompt: &str, action: &'static str) -> Result<i32> {
        match self.ask_ids(prompt)?.as_slice() {
            [id] => Ok(*id),
            _ => Err(AddressBookError::SingleIdRequired { action }),
        }
    }

    pub fn ask_phone_type(&mut self, prompt: &str) -> Result<TypeAnswer> {
        Ok(TypeAnswer::parse(self.ask(prompt, "phone type")?))
    }

    /// Writes a full line of plain output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    pub fn warn(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line.yellow())?;
        Ok(())
    }

    pub fn warn_unknown_type(&mut self, answer: &str) -> Result<()> {
        self.warn(&format!("Unknown phone type {:?}. Using default.", answer))
    }
}
