//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Output, Stdio};

fn bin() -> std::process::Command {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_apex"));
    cmd.env_remove("APEX_API_KEY");
    cmd.env_remove("APEX_BASE_URL");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn run_with_stdin(mut cmd: std::process::Command, stdin: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("normalize"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("apex"));
}

#[test]
fn normalize_plain_text() {
    let output = bin()
        .args(["normalize", "hello world"])
        .output()
        .expect("run binary");
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([{"role": "user", "content": "hello world"}])
    );
}

#[test]
fn normalize_messages_field_from_stdin() {
    let mut cmd = bin();
    cmd.args(["normalize", "-"]);
    let output = run_with_stdin(cmd, r#"{"messages":[{"text":"hi"}]}"#);
    assert_eq!(stdout_json(&output), serde_json::json!([{"text": "hi"}]));
}

#[test]
fn normalize_bare_object_is_not_wrapped() {
    let output = bin()
        .args(["normalize", r#"{"foo":"bar"}"#])
        .output()
        .expect("run binary");
    assert_eq!(stdout_json(&output), serde_json::json!({"foo": "bar"}));
}

#[test]
fn normalize_keeps_key_order() {
    let raw = r#"[{"text":"hi","author":"u1","time":"10:00"}]"#;
    let output = bin().args(["normalize", raw]).output().expect("run binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), raw);
}

#[test]
fn normalize_blank_input_fails() {
    let output = bin().args(["normalize", "   "]).output().expect("run binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty"));
}

#[test]
fn highlight_json_from_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("snippet.js");
    std::fs::write(&path, "const x = \"a\"; // c").expect("write file");

    let output = bin()
        .arg("highlight")
        .arg(&path)
        .arg("--json")
        .output()
        .expect("run binary");
    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            {"text": "const", "category": "keyword"},
            {"text": " x = ", "category": "plain"},
            {"text": "\"a\"", "category": "string"},
            {"text": ";", "category": "plain"},
            {"text": " ", "category": "plain"},
            {"text": "// c", "category": "comment"}
        ])
    );
}

#[test]
fn highlight_without_color_is_verbatim() {
    let mut cmd = bin();
    cmd.args(["highlight", "--no-color"]);
    let output = run_with_stdin(cmd, "def f():\n    return 'x'\n");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "def f():\n    return 'x'\n"
    );
}

#[test]
fn request_without_api_key_exits_with_error() {
    // Run from temp dir so dotenv() won't load .env from project root
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["request", "hello"])
        .current_dir(tmp.path())
        .output()
        .expect("run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("APEX_API_KEY"),
        "expected API key error message, got: {}",
        stderr
    );
}

#[test]
fn request_renders_bearer_header_and_body() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["request", "[{\"text\":\"hi\"}]", "--key", "k-42"])
        .current_dir(tmp.path())
        .output()
        .expect("run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("POST http://localhost:5000/api/run_inference\n"));
    assert!(stdout.contains("Authorization: Bearer k-42\n"));
    assert!(stdout.contains("\n\n[{\"text\":\"hi\"}]"));
}

#[test]
fn response_summarizes_results() {
    let mut cmd = bin();
    cmd.arg("response");
    let output = run_with_stdin(cmd, r#"{"results":[{"result":"clean","ts":0}]}"#);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "1970-01-01 00:00:00 UTC  \"clean\"\n"
    );
}

#[test]
fn snippet_curl_prints_code() {
    let output = bin()
        .args(["snippet", "curl", "--no-color"])
        .env("APEX_BASE_URL", "https://apex.example/")
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Quick Terminal Test\n"));
    assert!(stdout.contains("curl -X POST https://apex.example/api/run_inference"));
}
