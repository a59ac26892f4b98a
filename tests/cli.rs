/// End-to-end runs of the `percolation` binary
use std::fs;
use std::process::Command;

fn percolation() -> Command
{
    Command::new(env!("CARGO_BIN_EXE_percolation"))
}

#[test]
fn prints_summary_for_positional_arguments()
{
    let output = percolation().args(["10", "20", "--seed", "4"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mean"), "got: {stdout}");
    assert!(stdout.contains("stddev"), "got: {stdout}");
    assert!(stdout.contains("95% confidence interval"), "got: {stdout}");
}

#[test]
fn rejects_non_positive_arguments()
{
    for args in [["0", "5"], ["5", "0"], ["-1", "5"]]
    {
        let output = percolation().args(args).output().unwrap();
        assert!(!output.status.success(), "{args:?} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("must be positive"), "got: {stderr}");
        assert!(!stderr.contains("panicked"), "got: {stderr}");
    }
}

#[test]
fn rejects_malformed_numbers()
{
    let output = percolation().args(["ten", "5"]).output().unwrap();
    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
}

#[test]
fn reads_parameter_file_and_writes_thresholds()
{
    let dir    = tempfile::tempdir().unwrap();
    let params = dir.path().join("params.txt");
    let csv    = dir.path().join("thresholds.csv");
    fs::write(&params, "grid_size: 6\ntrials: 12\nseed: 3\nparallel: false\n").unwrap();

    let output = percolation()
        .arg("--params")
        .arg(&params)
        .arg("--output")
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let content = fs::read_to_string(&csv).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("trial, threshold, grid_size: 6"));
}

#[test]
fn missing_trial_count_is_reported()
{
    let dir    = tempfile::tempdir().unwrap();
    let params = dir.path().join("params.txt");
    fs::write(&params, "grid_size: 6\n").unwrap();

    let output = percolation().arg("--params").arg(&params).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing parameter: trials"));

    // a positional trial count fills the gap
    let output = percolation().arg("--params").arg(&params).args(["6", "4"]).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn missing_positional_arguments_without_parameter_file()
{
    let output = percolation().arg("8").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing trial count"));
}

#[test]
fn single_site_grid_reports_threshold_one()
{
    let dir    = tempfile::tempdir().unwrap();
    let csv    = dir.path().join("single.csv");
    let output = percolation().args(["1", "3", "--seed", "5", "--output"]).arg(&csv).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line.starts_with("mean") && line.trim_end().ends_with("= 1")), "got: {stdout}");

    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(content.lines().skip(1).collect::<Vec<_>>(), ["0, 1", "1, 1", "2, 1"]);
}
