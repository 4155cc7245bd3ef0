//! CLI entrypoint for the Gentler word-modernization tool.
//!
//! The binary delegates to [`gentler_cli::run`], which loads configuration,
//! installs telemetry, parses the subcommand and runs it against the process
//! streams.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    gentler_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
