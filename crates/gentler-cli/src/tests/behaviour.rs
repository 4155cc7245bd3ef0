//! BDD step definitions for Gentler CLI behavioural tests.
//!
//! These steps map the scenarios in `tests/features/gentler_cli.feature` to
//! in-process CLI runs against a scratch directory.

use std::cell::RefCell;
use std::process::ExitCode;

use rstest_bdd_macros::{given, scenario, then, when};

use super::support::{SAMPLE_RULES, TestWorld, world};

#[given("the sample rule table")]
fn given_sample_rules(world: &RefCell<TestWorld>) {
    world.borrow().write_rules(SAMPLE_RULES);
}

#[given("the input file {name} reading {text}")]
fn given_input_file(world: &RefCell<TestWorld>, name: String, text: String) {
    let contents = format!("{}\n", text.trim_matches('"'));
    world
        .borrow()
        .write_input(name.trim_matches('"'), &contents);
}

#[when("the operator modernizes {line} from book {book}")]
fn when_operator_modernizes(world: &RefCell<TestWorld>, line: String, book: String) {
    let args = world
        .borrow()
        .line_args(book.trim_matches('"'), line.trim_matches('"'));
    world.borrow_mut().run(&args);
}

#[when("the operator runs a dry batch")]
fn when_operator_runs_dry_batch(world: &RefCell<TestWorld>) {
    let args = world.borrow().batch_args();
    world.borrow_mut().run(&args);
}

#[when("the operator runs a committed batch")]
fn when_operator_runs_committed_batch(world: &RefCell<TestWorld>) {
    let mut args = world.borrow().batch_args();
    args.push(String::from("--do-it"));
    world.borrow_mut().run(&args);
}

#[then("the command succeeds")]
fn then_command_succeeds(world: &RefCell<TestWorld>) {
    let world = world.borrow();
    assert_eq!(
        world.exit_code,
        Some(ExitCode::SUCCESS),
        "stderr: {}",
        world.stderr_text()
    );
}

#[then("the command fails")]
fn then_command_fails(world: &RefCell<TestWorld>) {
    assert_eq!(world.borrow().exit_code, Some(ExitCode::FAILURE));
}

#[then("stdout contains {text}")]
fn then_stdout_contains(world: &RefCell<TestWorld>, text: String) {
    let stdout = world.borrow().stdout_text();
    let expected = text.trim_matches('"');
    assert!(
        stdout.contains(expected),
        "expected stdout to contain {expected:?}, got {stdout:?}"
    );
}

#[then("stderr contains {text}")]
fn then_stderr_contains(world: &RefCell<TestWorld>, text: String) {
    let stderr = world.borrow().stderr_text();
    let expected = text.trim_matches('"');
    assert!(
        stderr.contains(expected),
        "expected stderr to contain {expected:?}, got {stderr:?}"
    );
}

#[then("the output file {name} contains {text}")]
fn then_output_file_contains(world: &RefCell<TestWorld>, name: String, text: String) {
    let contents = world.borrow().read_output(name.trim_matches('"'));
    let expected = text.trim_matches('"');
    assert!(
        contents.contains(expected),
        "expected {name} to contain {expected:?}, got {contents:?}"
    );
}

#[then("no output directory exists")]
fn then_no_output_directory(world: &RefCell<TestWorld>) {
    assert!(!world.borrow().output_dir().exists());
}

#[scenario(path = "tests/features/gentler_cli.feature")]
fn gentler_cli_behaviour(world: RefCell<TestWorld>) {
    let _ = world;
}
