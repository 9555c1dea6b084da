use std::io::Read;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
struct Output {
    success: bool,
    stdout: String,
    stderr: String,
}

fn run_cli<'a>(args: impl IntoIterator<Item = &'a str>) -> Output {
    const TEST_TIMEOUT: Duration = Duration::from_secs(30);

    let mut child = Command::new(env!("CARGO_BIN_EXE_cutoff-cli"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run cutoff-cli.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("cutoff-cli took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting cutoff-cli: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("Failed to read stdout.");
    let mut stderr = String::new();
    let _ = child
        .stderr
        .take()
        .expect("stderr is piped")
        .read_to_string(&mut stderr)
        .expect("Failed to read stderr.");

    Output {
        success: status.success(),
        stdout,
        stderr,
    }
}

fn parse_values(stdout: &str) -> Vec<u64> {
    stdout
        .lines()
        .map(|line| line.parse().expect("every line is a cutoff"))
        .collect()
}

#[test]
fn prints_luby_sequence() {
    let output = run_cli(["--strategy", "luby", "--base", "1", "--count", "15"]);
    assert!(output.success, "{}", output.stderr);
    assert_eq!(
        parse_values(&output.stdout),
        vec![1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8]
    );
}

#[test]
fn prints_geometric_sequence() {
    let output = run_cli([
        "--strategy",
        "geometric",
        "--base",
        "5",
        "--geometric-factor",
        "2",
        "-n",
        "5",
    ]);
    assert!(output.success, "{}", output.stderr);
    assert_eq!(parse_values(&output.stdout), vec![5, 10, 20, 40, 80]);
}

#[test]
fn random_sequence_is_reproducible() {
    let args = [
        "--strategy",
        "random",
        "--seed",
        "17",
        "--random-min",
        "10",
        "--random-max",
        "90",
        "--random-window",
        "8",
        "-n",
        "500",
    ];
    let first = run_cli(args);
    let second = run_cli(args);
    assert!(first.success, "{}", first.stderr);

    let values = parse_values(&first.stdout);
    assert_eq!(values.len(), 500);
    assert!(values.iter().all(|&value| value >= 10));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_options_fail() {
    let output = run_cli(["--strategy", "geometric", "--geometric-factor", "0"]);
    assert!(!output.success);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("growth factor"));
}

#[test]
fn empty_random_range_fails() {
    let output = run_cli(["--strategy", "random", "--random-min", "5", "--random-max", "4"]);
    assert!(!output.success);
    assert!(output.stderr.contains("larger than the maximum"));
}
