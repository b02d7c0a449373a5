//! Record schema for the address book.
//!
//! The types are plain `prost` messages, so the on-disk format is the protobuf
//! wire encoding of:
//!
//! ```text
//! message AddressBook { repeated Person people = 1; }
//! message Person {
//!   string name = 1;
//!   int32 id = 2;
//!   string email = 3;
//!   repeated PhoneNumber phones = 4;
//! }
//! message PhoneNumber { string number = 1; PhoneType type = 2; }
//! enum PhoneType { UNKNOWN = 0; MOBILE = 1; HOME = 2; WORK = 3; }
//! ```
//!
//! Files written by any other protobuf implementation of this schema decode
//! here and vice versa.

use crate::error::Result;
use prost::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum PhoneType {
    Unknown = 0,
    Mobile = 1,
    Home = 2,
    Work = 3,
}

impl PhoneType {
    /// Maps a typed answer to a phone type. Only the exact lowercase words
    /// `mobile`, `home` and `work` match.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "mobile" => Some(Self::Mobile),
            "home" => Some(Self::Home),
            "work" => Some(Self::Work),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Mobile => "MOBILE",
            Self::Home => "HOME",
            Self::Work => "WORK",
        }
    }

    /// Listing label, `None` for phones without a known type.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Unknown => None,
            Self::Mobile => Some("Mobile phone #:"),
            Self::Home => Some("Home phone #:"),
            Self::Work => Some("Work phone #:"),
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct PhoneNumber {
    #[prost(string, tag = "1")]
    pub number: String,
    #[prost(enumeration = "PhoneType", tag = "2")]
    pub r#type: i32,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>, phone_type: PhoneType) -> Self {
        Self {
            number: number.into(),
            r#type: phone_type as i32,
        }
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct Person {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub id: i32,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(message, repeated, tag = "4")]
    pub phones: Vec<PhoneNumber>,
}

impl Person {
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phones: Vec::new(),
        }
    }

    pub fn with_phone(mut self, number: impl Into<String>, phone_type: PhoneType) -> Self {
        self.phones.push(PhoneNumber::new(number, phone_type));
        self
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct AddressBook {
    #[prost(message, repeated, tag = "1")]
    pub people: Vec<Person>,
}

impl AddressBook {
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Decodes a book from its wire bytes. Empty input is the empty book.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::decode(bytes)?)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf)
    }

    /// Position of the first person with `id`, scanning in book order.
    pub fn position_of(&self, id: i32) -> Option<usize> {
        self.people.iter().position(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: i32) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == id)
    }
}
