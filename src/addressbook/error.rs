use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Invalid arguments, only one filename is accepted")]
    Usage,

    #[error("{}: File not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse address book: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("Failed to encode address book: {0}")]
    Encode(#[from] prost::EncodeError),

    #[error("Failed to write address book: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error with address: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Error with address: unexpected end of input while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("Error with address: expected a person ID number, got {input:?}")]
    InvalidId { input: String },

    #[error("Error with address: You can only {action} one address at a time.")]
    SingleIdRequired { action: &'static str },

    #[error("Error with address: No person is found.")]
    PersonNotFound(i32),

    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
