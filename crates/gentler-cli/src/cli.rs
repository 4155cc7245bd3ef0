//! CLI argument definitions for the Gentler toolchain.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Command-line interface for the Gentler word-modernization tool.
#[derive(Parser, Debug)]
#[command(
    name = "gentler",
    about = "Modernizes archaic words in verse text using a rule table",
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    /// The operation to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Structured subcommands for the Gentler CLI.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Modernizes every `.txt` file in a directory and writes a change report.
    Batch(BatchArgs),
    /// Modernizes a single line and prints the result.
    Line(LineArgs),
}

/// Arguments for `gentler batch`.
#[derive(Args, Debug, Clone)]
pub(crate) struct BatchArgs {
    /// Tab-separated rule table: old phrase, new phrase, optional verb.
    #[arg(long, value_name = "FILE")]
    pub(crate) dictionary: Utf8PathBuf,
    /// Directory holding the input `.txt` files.
    #[arg(long, value_name = "DIR")]
    pub(crate) input_path: Utf8PathBuf,
    /// Directory receiving the modernized files and `explanation.txt`.
    #[arg(long, value_name = "DIR")]
    pub(crate) output_path: Utf8PathBuf,
    /// Skips input files, in name order, until this one is reached.
    #[arg(long, value_name = "NAME")]
    pub(crate) first_file: Option<String>,
    /// Processes at most this many files.
    #[arg(long)]
    pub(crate) count: Option<usize>,
    /// Writes output files; without it the run is a dry run.
    #[arg(long)]
    pub(crate) do_it: bool,
    /// Prints every changed line.
    #[arg(long)]
    pub(crate) verbose: bool,
}

/// Arguments for `gentler line`.
#[derive(Args, Debug, Clone)]
pub(crate) struct LineArgs {
    /// Tab-separated rule table: old phrase, new phrase, optional verb.
    #[arg(long, value_name = "FILE")]
    pub(crate) dictionary: Utf8PathBuf,
    /// Two-digit number of the source document.
    #[arg(long, default_value = "00")]
    pub(crate) book: String,
    /// The verse line, for example `MAT 1:2  Abraham begat Isaac`.
    #[arg(value_name = "LINE")]
    pub(crate) line: String,
}
