use std::env;
use std::io;
use std::process::ExitCode;

use alphatree::source::{from_file, from_keyboard, PROMPT};
use alphatree::try_verify;

fn main() -> ExitCode {
    // a path argument checks that file; otherwise read from the keyboard
    let report = match env::args_os().nth(1) {
        Some(path) => from_file(path).and_then(try_verify),
        None => {
            println!("{PROMPT}");
            try_verify(from_keyboard(io::stdin().lock()))
        }
    };

    match report {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
