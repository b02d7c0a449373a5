use addressbook::cli::{self, Tool};

fn main() {
    cli::main(Tool::List);
}
