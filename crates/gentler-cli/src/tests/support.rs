//! Harness shared by the CLI unit and behaviour tests.
//!
//! The world owns a temporary directory holding the rule table and the
//! input and output directories, runs the CLI in-process with a fixed
//! configuration and captures both streams.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use gentler_config::Config;
use rstest::fixture;
use tempfile::TempDir;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

/// Rule table used by most tests.
pub(super) const SAMPLE_RULES: &str = "# archaic words\t\t\nbegat\tfathered\nunto\tto\tNot mark\n";

/// A config loader that returns a fixed configuration for tests.
pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Test world holding the scratch directory and captured output.
pub(super) struct TestWorld {
    pub config: Config,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<ExitCode>,
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self {
            config: Config::default(),
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: None,
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }
}

impl TestWorld {
    fn root(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.temp_dir.path().to_path_buf())
            .expect("temp dir path is UTF-8")
    }

    pub fn dictionary_path(&self) -> Utf8PathBuf {
        self.root().join("rules.tsv")
    }

    pub fn input_dir(&self) -> Utf8PathBuf {
        self.root().join("input")
    }

    pub fn output_dir(&self) -> Utf8PathBuf {
        self.root().join("output")
    }

    pub fn write_rules(&self, rules: &str) {
        fs::write(self.dictionary_path(), rules).expect("write rule table");
    }

    pub fn write_input(&self, name: &str, contents: &str) {
        let dir = self.input_dir();
        fs::create_dir_all(&dir).expect("create input dir");
        fs::write(dir.join(name), contents).expect("write input file");
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output_dir().join(name)).expect("read output file")
    }

    /// Arguments for `gentler batch` over this world's directories.
    pub fn batch_args(&self) -> Vec<String> {
        vec![
            String::from("batch"),
            String::from("--dictionary"),
            self.dictionary_path().into_string(),
            String::from("--input-path"),
            self.input_dir().into_string(),
            String::from("--output-path"),
            self.output_dir().into_string(),
        ]
    }

    /// Arguments for `gentler line` against this world's rule table.
    pub fn line_args(&self, book: &str, line: &str) -> Vec<String> {
        vec![
            String::from("line"),
            String::from("--dictionary"),
            self.dictionary_path().into_string(),
            String::from("--book"),
            book.to_owned(),
            line.to_owned(),
        ]
    }

    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) {
        self.stdout.clear();
        self.stderr.clear();
        let args = std::iter::once(OsString::from("gentler"))
            .chain(args.iter().map(|arg| OsString::from(arg.as_ref())));
        let loader = StaticConfigLoader::new(self.config.clone());
        let mut io = IoStreams::new(&mut self.stdout, &mut self.stderr);
        self.exit_code = Some(run_with_loader(args, &mut io, &loader));
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.clone()).expect("stdout is UTF-8")
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8(self.stderr.clone()).expect("stderr is UTF-8")
    }
}

#[fixture]
pub(super) fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}
