//! Unit and behavioural tests for the CLI runtime.

mod behaviour;
mod support;

use std::process::ExitCode;

use rstest::rstest;

use support::{SAMPLE_RULES, TestWorld};

const MATTHEW: &str = "MAT 1:2  Abraham begat Isaac; and Isaac begat Jacob\n\
MAT 1:3  And Judas begat Phares\n\
MAT 1:4  And it came to pass\n";
const JOHN: &str = "JOH 1:1  He spake unto them\n";

fn world_with_inputs() -> TestWorld {
    let world = TestWorld::default();
    world.write_rules(SAMPLE_RULES);
    world.write_input("40MAT.txt", MATTHEW);
    world.write_input("43JOH.TXT", JOHN);
    world.write_input("notes.md", "MAT 9:9  begat\n");
    world
}

#[test]
fn line_prints_edited_text_and_rule_entries() {
    let mut world = TestWorld::default();
    world.write_rules(SAMPLE_RULES);

    world.run(&world.line_args("40", "MAT 1:2  Abraham begat Isaac"));

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS));
    assert_eq!(
        world.stdout_text(),
        "MAT 1:2  Abraham fathered [begat] Isaac\nbegat -> fathered: 40MAT 1:2_\n\n"
    );
    assert!(world.stderr.is_empty());
}

#[test]
fn line_without_matches_is_echoed() {
    let mut world = TestWorld::default();
    world.write_rules(SAMPLE_RULES);

    world.run(&world.line_args("40", "MAT 1:4  And it came to pass"));

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS));
    assert_eq!(world.stdout_text(), "MAT 1:4  And it came to pass\n");
}

#[rstest]
#[case(1, "GEN 1:1  the lord\n")]
#[case(3, "GEN 1:1  the the the lord\n")]
fn configured_cap_limits_silent_replacements(#[case] cap: usize, #[case] expected: &str) {
    let mut world = TestWorld::default();
    world.config.max_replacements_per_rule = cap;
    world.write_rules("lord\tthe lord\tNot mark\n");

    world.run(&world.line_args("01", "GEN 1:1  lord"));

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS));
    assert!(
        world.stdout_text().starts_with(expected),
        "unexpected output {:?}",
        world.stdout_text()
    );
}

#[test]
fn help_is_printed_to_stdout() {
    let mut world = TestWorld::default();
    world.run(&["--help"]);

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS));
    assert!(world.stdout_text().contains("Usage"));
    assert!(world.stderr.is_empty());
}

#[test]
fn missing_subcommand_fails() {
    let mut world = TestWorld::default();
    world.run::<&str>(&[]);

    assert_eq!(world.exit_code, Some(ExitCode::FAILURE));
    assert!(world.stderr_text().contains("Usage"));
}

#[test]
fn missing_rule_table_is_reported() {
    let mut world = TestWorld::default();
    world.run(&world.line_args("40", "MAT 1:2  Abraham begat Isaac"));

    assert_eq!(world.exit_code, Some(ExitCode::FAILURE));
    assert!(world.stdout.is_empty());
    assert!(
        world.stderr_text().contains("failed to read rule table"),
        "unexpected stderr {:?}",
        world.stderr_text()
    );
}

#[test]
fn batch_writes_edited_files_and_explanation() {
    let mut world = world_with_inputs();
    let mut args = world.batch_args();
    args.push(String::from("--do-it"));

    world.run(&args);

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS), "{}", world.stderr_text());
    assert_eq!(
        world.read_output("40MAT.txt"),
        "MAT 1:2  Abraham fathered [begat] Isaac; and Isaac begat Jacob\n\
MAT 1:3  And Judas fathered [begat] Phares\n\
MAT 1:4  And it came to pass\n"
    );
    assert_eq!(world.read_output("43JOH.TXT"), "JOH 1:1  He spake to them\n");
    assert_eq!(
        world.read_output("explanation.txt"),
        "#2 files processed, 3 verses changed out of 4.\n\
40MAT 1:2_40MAT 1:3_43JOH 1:1_\n\
\n\
begat -> fathered: 40MAT 1:2_40MAT 1:3_\n\
\n\
unto -> to: 43JOH 1:1_\n\
\n"
    );
    assert!(!world.output_dir().join("notes.md").exists());
    assert!(world.stdout_text().contains("report written to"));
}

#[test]
fn dry_run_writes_nothing_and_prints_the_report() {
    let mut world = world_with_inputs();

    world.run(&world.batch_args());

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS));
    assert!(!world.output_dir().exists());
    let stdout = world.stdout_text();
    assert!(stdout.starts_with("Dry run"), "unexpected stdout {stdout:?}");
    assert!(stdout.contains("#2 files processed, 3 verses changed out of 4."));
}

#[test]
fn verbose_batch_echoes_changed_lines() {
    let mut world = world_with_inputs();
    let mut args = world.batch_args();
    args.push(String::from("--verbose"));

    world.run(&args);

    let stdout = world.stdout_text();
    assert!(stdout.contains("MAT 1:3  And Judas fathered [begat] Phares\n"));
    assert!(stdout.contains("JOH 1:1  He spake to them\n"));
    assert!(!stdout.contains("MAT 1:4"));
}

#[rstest]
#[case::from_second(Some("43JOH.TXT"), None, "#1 files processed, 1 verses changed out of 1.")]
#[case::first_only(None, Some("1"), "#1 files processed, 2 verses changed out of 3.")]
#[case::zero(Some("40MAT.txt"), Some("0"), "#0 files processed, 0 verses changed out of 0.")]
fn batch_selects_files(
    #[case] first_file: Option<&str>,
    #[case] count: Option<&str>,
    #[case] header: &str,
) {
    let mut world = world_with_inputs();
    let mut args = world.batch_args();
    if let Some(name) = first_file {
        args.extend([String::from("--first-file"), name.to_owned()]);
    }
    if let Some(count) = count {
        args.extend([String::from("--count"), count.to_owned()]);
    }

    world.run(&args);

    assert_eq!(world.exit_code, Some(ExitCode::SUCCESS), "{}", world.stderr_text());
    assert!(
        world.stdout_text().contains(header),
        "unexpected stdout {:?}",
        world.stdout_text()
    );
}

#[test]
fn unknown_first_file_fails() {
    let mut world = world_with_inputs();
    let mut args = world.batch_args();
    args.extend([String::from("--first-file"), String::from("99XYZ.txt")]);

    world.run(&args);

    assert_eq!(world.exit_code, Some(ExitCode::FAILURE));
    assert!(world.stderr_text().contains("first file '99XYZ.txt' was not found"));
}

#[test]
fn missing_input_directory_fails() {
    let mut world = TestWorld::default();
    world.write_rules(SAMPLE_RULES);

    world.run(&world.batch_args());

    assert_eq!(world.exit_code, Some(ExitCode::FAILURE));
    assert!(world.stderr_text().contains("input path is not a directory"));
}
