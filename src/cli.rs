//! The command line interface for the compiler.
//!
//! Every argument is taken literally: there are no flags, so values such as `--help` or `--` are
//! treated as model paths like any other.
use crate::log;
use crate::target::Target;
use ::log::debug;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Write;

/// Exit code for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for any failure, including a missing model path
pub const EXIT_FAILURE: u8 = 1;

/// Prefix for the compiler's status messages
const MESSAGE_PREFIX: &str = "[Null]";

/// Indicates that the program was invoked without a model path
#[derive(Debug, PartialEq, derive_more::Display)]
#[display("Usage: nullc [model_path]")]
pub struct UsageError;

impl std::error::Error for UsageError {}

/// The validated command-line arguments
#[derive(Debug, PartialEq)]
pub struct Invocation {
    /// Path to the model to compile, exactly as supplied
    pub model_path: OsString,
    /// The architecture to generate code for
    pub target: Target,
    /// How many arguments after the model path were supplied (and ignored)
    pub num_ignored: usize,
}

/// Validate the arguments following the program name.
///
/// The first argument is the model path. Its contents are not checked in any way.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let model_path = args.next().ok_or(UsageError)?;

    Ok(Invocation {
        model_path,
        target: Target::default(),
        num_ignored: args.count(),
    })
}

/// Write the start-up banner for the given invocation.
///
/// The model path is echoed byte for byte, even if it is not valid UTF-8.
pub fn write_banner<W: Write>(out: &mut W, invocation: &Invocation) -> std::io::Result<()> {
    write!(out, "{MESSAGE_PREFIX} Initializing Compiler for: ")?;
    out.write_all(invocation.model_path.as_encoded_bytes())?;
    writeln!(out)?;
    writeln!(out, "{MESSAGE_PREFIX} Target Architecture: {}", invocation.target)
}

/// Handle a validated invocation.
///
/// Initialises logging before reporting the compiler's status on `out`. The only possible
/// failure is being unable to write to `out`.
pub fn handle_compile_command<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    // Logging is only diagnostic output, so a logger that can't be installed is not an error
    log::init().ok();

    debug!("Model path: {}", invocation.model_path.to_string_lossy());
    if invocation.num_ignored > 0 {
        debug!("Ignoring {} additional argument(s)", invocation.num_ignored);
    }

    write_banner(out, invocation).context("Failed to write to stdout.")?;
    out.flush().context("Failed to write to stdout.")?;

    Ok(())
}

/// Run the compiler with the given arguments (excluding the program name).
///
/// Status messages are written to `out` and errors to `err`. Returns the process exit code.
pub fn run<I, S, W, E>(args: I, out: &mut W, err: &mut E) -> u8
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    W: Write,
    E: Write,
{
    let result = parse_args(args)
        .map_err(anyhow::Error::from)
        .and_then(|invocation| handle_compile_command(&invocation, out));

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            // Nowhere left to report a failure to write to stderr
            if error.is::<UsageError>() {
                writeln!(err, "{error}").ok();
            } else {
                writeln!(err, "Error: {error:?}").ok();
            }
            err.flush().ok();

            EXIT_FAILURE
        }
    }
}
