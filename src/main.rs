//! Nameshift CLI entry point

use clap::Parser;
use nameshift::cli::args::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Migrate { root, yes } => {
            nameshift::cli::migrate::run_migrate(&root, yes, cli.color)
        }
        Command::Init { force } => match nameshift::cli::init::run_init(force) {
            Ok(_) => {
                println!("Created nameshift.toml and rule table stubs. Fill in the tables to start migrating.");
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                2
            }
        },
        Command::List { format } => nameshift::cli::list::run_list(format),
    };

    process::exit(exit_code);
}
