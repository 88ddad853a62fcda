//! Logging behaviour of the binary: destinations, formats and env overrides.

use super::test_utils::{json_of, stdout_of, TestWorkspace};

#[test]
fn test_default_logs_go_to_stderr_and_stdout_stays_json() {
    let ws = TestWorkspace::new();
    let output = ws
        .logged_command(&["rooms", "--format", "json"])
        .output()
        .unwrap();
    let rooms = json_of(&output);
    assert_eq!(rooms.as_array().unwrap().len(), 5);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("travelkit starting"), "stderr: {}", stderr);
    assert!(stderr.contains("Executing command"), "stderr: {}", stderr);
}

#[test]
fn test_file_output_writes_log_file() {
    let ws = TestWorkspace::new();
    let log_file = ws.temp.path().join("logs").join("travelkit.log");
    let output = ws
        .logged_command(&[
            "--log-output",
            "file",
            "--log-file",
            log_file.to_str().unwrap(),
            "theaters",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    let theaters = json_of(&output);
    assert_eq!(theaters.as_array().unwrap().len(), 9);
    assert!(output.stderr.is_empty(), "file output should keep stderr empty");

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.lines().count() >= 2, "log file: {}", contents);
    assert!(contents.contains("Command completed successfully"));
}

#[test]
fn test_env_format_override_emits_json_lines() {
    let ws = TestWorkspace::new();
    let output = ws
        .logged_command(&["partition", "--format", "json"])
        .env("TRAVELKIT_LOG_FORMAT", "json")
        .output()
        .unwrap();
    json_of(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(event.is_object(), "not a json event: {}", line);
        assert!(event.get("level").is_some());
    }
}

#[test]
fn test_env_output_override_moves_logs_to_file() {
    let ws = TestWorkspace::new();
    let log_file = ws.temp.path().join("override.log");
    let output = ws
        .logged_command(&["--log-file", log_file.to_str().unwrap(), "cities"])
        .env("TRAVELKIT_LOG_OUTPUT", "file")
        .output()
        .unwrap();
    assert!(stdout_of(&output).contains("Popular cities (10)"));
    assert!(output.stderr.is_empty());
    assert!(std::fs::read_to_string(&log_file)
        .unwrap()
        .contains("travelkit starting"));
}

#[test]
fn test_env_filter_override_silences_info() {
    let ws = TestWorkspace::new();
    let output = ws
        .logged_command(&["rooms", "--format", "json"])
        .env("TRAVELKIT_LOG", "warn")
        .output()
        .unwrap();
    json_of(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("travelkit starting"), "stderr: {}", stderr);
}

#[test]
fn test_unknown_cli_log_level_is_rejected() {
    let ws = TestWorkspace::new();
    let output = ws
        .logged_command(&["--log-level", "loud", "rooms"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid log level 'loud'"), "stderr: {}", stderr);
}
