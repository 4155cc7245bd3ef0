//! Runs the modernizer over a directory of verse files.
//!
//! Input files are the `*.txt` files of one directory, taken in file name
//! order. The first two characters of each file name are its book number;
//! every line of the file is one verse. A run shares one [`ChangeLedger`]
//! across all files, so the final report covers the whole batch.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use gentler_engine::{ChangeLedger, LineContext, Modernizer};
use thiserror::Error;
use tracing::{info, warn};

use crate::report::{EXPLANATION_FILE, Explanation};

/// Extension of input files, compared case-insensitively.
const INPUT_EXTENSION: &str = "txt";

/// Number of leading file name characters that form the book number.
const BOOK_NUMBER_LENGTH: usize = 2;

/// What to process and where to write it.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory holding the input files.
    pub input_path: Utf8PathBuf,
    /// Directory receiving edited files and the report.
    pub output_path: Utf8PathBuf,
    /// Skip files until this exact file name is reached.
    pub first_file: Option<String>,
    /// Maximum number of files to process.
    pub count: Option<usize>,
    /// Write output; when `false` nothing touches the filesystem.
    pub do_it: bool,
}

/// Totals of a finished run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Files read and modernized.
    pub files_processed: usize,
    /// Lines read across all files.
    pub verses_seen: usize,
    /// Every change made during the run.
    pub ledger: ChangeLedger,
}

impl BatchSummary {
    /// Returns the report for this run.
    #[must_use]
    pub const fn explanation(&self) -> Explanation<'_> {
        Explanation::new(self.files_processed, self.verses_seen, &self.ledger)
    }
}

/// Errors that halt a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input path is missing or not a directory.
    #[error("input path is not a directory: {path}")]
    InputNotDirectory {
        /// The configured input path.
        path: Utf8PathBuf,
    },
    /// The input directory could not be listed.
    #[error("failed to list input directory '{path}': {source}")]
    ListInput {
        /// The input directory.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The requested first file is not among the input files.
    #[error("first file '{name}' was not found in '{path}'")]
    FirstFileNotFound {
        /// The requested file name.
        name: String,
        /// The input directory.
        path: Utf8PathBuf,
    },
    /// The output directory could not be created.
    #[error("failed to create output directory '{path}': {source}")]
    CreateOutput {
        /// The output directory.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// An input file could not be read as UTF-8 text.
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        /// The input file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// An edited file could not be written.
    #[error("failed to write '{path}': {source}")]
    WriteOutput {
        /// The output file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The explanation report could not be written.
    #[error("failed to write report '{path}': {source}")]
    WriteReport {
        /// The report file.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Modernizes the selected input files.
///
/// `on_changed_line` receives every line a rule changed, after editing. When
/// `options.do_it` is set, edited files and the report are written to the
/// output directory.
///
/// # Errors
///
/// Stops at the first [`BatchError`]; files written before the failure stay
/// on disk.
pub fn run_batch<F>(
    options: &BatchOptions,
    modernizer: &Modernizer,
    mut on_changed_line: F,
) -> Result<BatchSummary, BatchError>
where
    F: FnMut(&str),
{
    let inputs = select_inputs(options)?;
    if options.do_it {
        fs::create_dir_all(&options.output_path).map_err(|source| BatchError::CreateOutput {
            path: options.output_path.clone(),
            source,
        })?;
    }

    let mut summary = BatchSummary::default();
    for input in &inputs {
        let file_name = input.file_name().unwrap_or_default();
        let book_number = book_number(file_name);
        let text = fs::read_to_string(input).map_err(|source| BatchError::ReadInput {
            path: input.clone(),
            source,
        })?;

        let mut edited = String::with_capacity(text.len());
        for line in text.lines() {
            let mut context = LineContext::new(line, "", "").with_book_number(book_number);
            modernizer.upgrade_context(&mut context, &mut summary.ledger);
            let edited_line = context.edited_line();
            if context.is_dirty() {
                on_changed_line(&edited_line);
            }
            edited.push_str(&edited_line);
            edited.push('\n');
            summary.verses_seen += 1;
        }

        if options.do_it {
            let output = options.output_path.join(file_name);
            fs::write(&output, edited).map_err(|source| BatchError::WriteOutput {
                path: output.clone(),
                source,
            })?;
            info!(input = %input, output = %output, "processed file");
        } else {
            info!(input = %input, "processed file (dry run)");
        }
        summary.files_processed += 1;
    }

    if options.do_it {
        let report_path = options.output_path.join(EXPLANATION_FILE);
        fs::write(&report_path, summary.explanation().to_string()).map_err(|source| {
            BatchError::WriteReport {
                path: report_path.clone(),
                source,
            }
        })?;
    }

    info!(
        files = summary.files_processed,
        verses = summary.verses_seen,
        changed = summary.ledger.verse_changes().len(),
        "finished processing"
    );
    Ok(summary)
}

/// Lists, orders and filters the input files.
fn select_inputs(options: &BatchOptions) -> Result<Vec<Utf8PathBuf>, BatchError> {
    let mut inputs = list_inputs(&options.input_path)?;

    if let Some(first) = options.first_file.as_deref() {
        let start = inputs
            .iter()
            .position(|path| path.file_name() == Some(first))
            .ok_or_else(|| BatchError::FirstFileNotFound {
                name: first.to_owned(),
                path: options.input_path.clone(),
            })?;
        inputs.drain(..start);
    }
    if let Some(count) = options.count {
        inputs.truncate(count);
    }
    Ok(inputs)
}

fn list_inputs(dir: &Utf8Path) -> Result<Vec<Utf8PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::InputNotDirectory {
            path: dir.to_owned(),
        });
    }
    let list_error = |source| BatchError::ListInput {
        path: dir.to_owned(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        let Ok(path) = Utf8PathBuf::from_path_buf(path) else {
            warn!(dir = %dir, "skipping file with a non UTF-8 name");
            continue;
        };
        let is_text = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case(INPUT_EXTENSION));
        if is_text && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(inputs)
}

/// The leading characters of a file name, `40` for `40MAT.TXT`.
fn book_number(file_name: &str) -> &str {
    file_name
        .char_indices()
        .nth(BOOK_NUMBER_LENGTH)
        .and_then(|(end, _)| file_name.get(..end))
        .unwrap_or(file_name)
}
