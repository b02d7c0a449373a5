//! # addressbook
//!
//! Four small interactive tools over one protobuf-encoded address book file:
//!
//! | binary          | does                                              |
//! |-----------------|---------------------------------------------------|
//! | `add_person`    | prompts for a person and appends it               |
//! | `delete_person` | removes the first person with an id, after `y`    |
//! | `update_person` | edits name, email and existing phones of a person |
//! | `list_people`   | prints every person                               |
//!
//! Each one takes the file name as its only argument.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  cli.rs + bin/*.rs                                          │
//! │  - argv, stdin/stdout, exit codes, config, logging setup    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  api.rs                                                     │
//! │  - load → decode → command → encode → save                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  commands/*.rs                                              │
//! │  - one in-memory edit per run, input via a `Prompter`       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  store/                                                     │
//! │  - BookStore trait: FileStore, InMemoryStore (tests)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing reads the process's stdin or stdout directly:
//! readers and writers are passed in, so every flow can be driven from a test
//! with a `Cursor` and a `Vec<u8>`.
//!
//! ## Module Overview
//!
//! - [`api`]: load/run/save wrapper around each command
//! - [`commands`]: add, delete, update, list
//! - [`model`]: `AddressBook`, `Person`, `PhoneNumber`, `PhoneType` and their encoding
//! - [`prompt`]: line-oriented question/answer over any reader and writer
//! - [`store`]: whole-file byte storage
//! - [`config`]: user configuration (`config.json`)
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: error types
//! - [`cli`]: argument parsing and the process entry point

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod prompt;
pub mod store;
