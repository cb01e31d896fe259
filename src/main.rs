#![warn(missing_docs)]
//! Downloads spell-check dictionaries and affix files for several languages.

use std::process::ExitCode;

use dictionary_fetcher::entry;
use dictionary_fetcher::reporting::ErrorExt;

fn main() -> ExitCode {
    match entry::main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error.error_chain());
            ExitCode::FAILURE
        }
    }
}
