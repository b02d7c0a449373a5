//! Shared entry point for the four binaries.
//!
//! Each binary is `fn main() { cli::main(Tool::X) }`. This is the only place
//! that touches the process: arguments, stdin/stdout, exit codes.

use crate::api::AddressBookApi;
use crate::config::AddressBookConfig;
use crate::error::{AddressBookError, Result};
use crate::logging::init_logging;
use crate::prompt::Prompter;
use crate::store::fs::FileStore;
use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// All four tools take exactly one argument and nothing else.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Address book file
    pub filename: PathBuf,
}

impl Cli {
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|_| AddressBookError::Usage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Add,
    Delete,
    Update,
    List,
}

pub fn main(tool: Tool) {
    if let Err(e) = run(tool, std::env::args_os()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn run<I, T>(tool: Tool, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_args(args)?;
    let config = AddressBookConfig::load_default()?;
    init_logging(&config.log_level);

    let store = FileStore::new(cli.filename).with_file_mode(config.file_mode);
    let mut api = AddressBookApi::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match tool {
        Tool::Add => api.add_person(&mut prompter)?,
        Tool::Delete => api.delete_person(&mut prompter)?,
        Tool::Update => api.update_person(&mut prompter)?,
        Tool::List => api.list_people(prompter.writer())?,
    };
    Ok(())
}
