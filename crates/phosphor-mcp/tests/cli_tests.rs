//! Binary smoke tests: argument handling and a stdio session.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const ENV_VARS: &[&str] = &[
    "PHOSPHOR_DEFAULT_WEIGHT",
    "PHOSPHOR_BASE_URL",
    "PHOSPHOR_TIMEOUT_SECS",
    "PHOSPHOR_BATCH_CONCURRENCY",
    "PHOSPHOR_CATALOG",
];

/// The binary with an empty config file and no settings from the environment.
fn phosphor_mcp(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("phosphor-mcp").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.arg("--config").arg(config.path());
    cmd
}

fn empty_config() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

#[test]
fn help_lists_flags() {
    Command::cargo_bin("phosphor-mcp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--default-weight"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--batch-concurrency"));
}

#[test]
fn stdio_session_answers_each_request_and_exits_on_eof() {
    let config = empty_config();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-03-26"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#,
        "\n",
    );

    let output = phosphor_mcp(&config)
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let responses: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(responses.len(), 3, "{stdout}");
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 4);
    assert_eq!(responses[2]["id"], 3);
}

#[test]
fn logs_stay_off_stdout() {
    let config = empty_config();
    phosphor_mcp(&config)
        .arg("--verbose")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Starting phosphor-mcp server"));
}

#[test]
fn rust_log_overrides_verbose_default() {
    let config = empty_config();
    phosphor_mcp(&config)
        .env("RUST_LOG", "phosphor_mcp=warn")
        .arg("--verbose")
        .write_stdin("")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting phosphor-mcp server").not());
}

#[test]
fn default_weight_flag_reaches_tool_schemas() {
    let config = empty_config();
    phosphor_mcp(&config)
        .args(["--default-weight", "duotone"])
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Defaults to \"duotone\""#));
}

#[test]
fn config_file_sets_default_weight() {
    let mut config = empty_config();
    writeln!(config, "defaultWeight = \"bold\"").unwrap();

    phosphor_mcp(&config)
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Defaults to \"bold\""#));
}

#[test]
fn unknown_weight_is_rejected_by_argument_parsing() {
    let config = empty_config();
    phosphor_mcp(&config)
        .args(["--default-weight", "heavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("heavy"));
}

#[test]
fn out_of_range_concurrency_fails_at_startup() {
    let config = empty_config();
    phosphor_mcp(&config)
        .args(["--batch-concurrency", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("batchConcurrency"));
}

#[test]
fn unknown_config_key_fails_at_startup() {
    let mut config = empty_config();
    writeln!(config, "defaultColour = \"red\"").unwrap();

    phosphor_mcp(&config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("defaultColour"));
}
