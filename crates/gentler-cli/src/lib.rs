//! Command-line runtime for the Gentler toolchain.
//!
//! The runtime owns argument parsing, configuration bootstrapping, telemetry
//! installation and dispatch to the `batch` and `line` commands. It is driven
//! from the binary entrypoint and from tests, where configuration loading and
//! the output streams are substituted.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use clap::Parser;
use gentler_config::Config;
use gentler_engine::{ChangeLedger, Modernizer};

pub mod batch;
mod cli;
mod config;
mod errors;
pub mod report;
pub mod rule_table;
pub mod telemetry;

use batch::{BatchOptions, run_batch};
use cli::{BatchArgs, Cli, CliCommand, LineArgs};
use config::{prepare_cli_arguments, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub(crate) use errors::AppError;
use report::{EXPLANATION_FILE, RuleEntries};
use rule_table::read_rule_table;

/// Bundles the output streams handed to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
///
/// Help and version requests print to `stdout` and succeed. Every other
/// failure is reported on `stderr` with [`ExitCode::FAILURE`].
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);
    let cli_arguments = prepare_cli_arguments(&args, &split);

    let result = Cli::try_parse_from(cli_arguments)
        .map_err(AppError::CliUsage)
        .and_then(|cli| {
            loader
                .load(&split.config_arguments)
                .map(|config| (cli, config))
        })
        .and_then(|(cli, config)| {
            telemetry::initialise(&config)?;
            execute(cli.command, &config, io)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            let _ = write!(io.stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = writeln!(io.stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W, E>(
    command: CliCommand,
    config: &Config,
    io: &mut IoStreams<'_, W, E>,
) -> Result<(), AppError>
where
    W: Write,
    E: Write,
{
    match command {
        CliCommand::Batch(args) => execute_batch(args, config, &mut *io.stdout),
        CliCommand::Line(args) => execute_line(&args, config, &mut *io.stdout),
    }
}

fn load_modernizer(dictionary: &Utf8Path, config: &Config) -> Result<Modernizer, AppError> {
    let table = read_rule_table(dictionary)?;
    Ok(Modernizer::new(table, config.engine_config()))
}

fn execute_batch<W: Write>(
    args: BatchArgs,
    config: &Config,
    stdout: &mut W,
) -> Result<(), AppError> {
    let modernizer = load_modernizer(&args.dictionary, config)?;
    let verbose = args.verbose;
    let options = BatchOptions {
        input_path: args.input_path,
        output_path: args.output_path,
        first_file: args.first_file,
        count: args.count,
        do_it: args.do_it,
    };

    // First echo failure is raised after the run.
    let mut echoed: io::Result<()> = Ok(());
    let summary = run_batch(&options, &modernizer, |line| {
        if verbose && echoed.is_ok() {
            echoed = writeln!(stdout, "{line}");
        }
    })?;
    echoed?;

    if options.do_it {
        writeln!(
            stdout,
            "{} files processed, {} verses changed out of {}; report written to {}",
            summary.files_processed,
            summary.ledger.verse_changes().len(),
            summary.verses_seen,
            options.output_path.join(EXPLANATION_FILE)
        )?;
    } else {
        writeln!(stdout, "Dry run: no files written. Pass --do-it to write output.")?;
        write!(stdout, "{}", summary.explanation())?;
    }
    stdout.flush()?;
    Ok(())
}

fn execute_line<W: Write>(args: &LineArgs, config: &Config, stdout: &mut W) -> Result<(), AppError> {
    let modernizer = load_modernizer(&args.dictionary, config)?;
    let mut ledger = ChangeLedger::default();
    let edited = modernizer.upgrade_line(&args.book, &args.line, &mut ledger);

    writeln!(stdout, "{edited}")?;
    write!(stdout, "{}", RuleEntries(&ledger))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
