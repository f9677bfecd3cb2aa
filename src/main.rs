use clap::Parser;
use std::process;
use xtm_quote::cli::{args::Args, commands, input};

fn main() {
    let args = Args::parse();

    let result = commands::run(&args);

    let exit_code = match result {
        Ok(_stats) => {
            // Success - the summary has already been printed by the command
            0
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            1
        }
    };

    // Hold the console open for double-click users
    if !args.batch {
        let _ = input::pause_before_exit();
    }

    process::exit(exit_code);
}
