// src/main.rs

use std::{io, process::ExitCode};

use type_index::{commands, logging};

fn main() -> ExitCode {
    logging::init();
    let result = commands::run_cli();
    let code = commands::report(result, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
