//! Provides the main entry point to the program.
use human_panic::setup_panic;
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    setup_panic!();

    let code = nullc::cli::run(
        env::args_os().skip(1),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    ExitCode::from(code)
}
