//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_ai", "-", "text", "-", "cleaner"));
    let mut cmd = Command::new(bin);
    cmd.env_remove("OPENROUTER_API_KEY");
    cmd
}

/// Run the binary with `args`, feeding `input` on stdin.
fn run_with_stdin(cmd: &mut Command, input: &str) -> std::process::Output {
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
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
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
    assert!(!stdout.is_empty());
    assert!(
        stdout.contains("ai-text-cleaner") || stdout.contains("rewrite"),
        "expected usage text in output"
    );
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ai-text-cleaner"));
}

#[test]
fn clean_from_stdin_needs_no_api_key() {
    let output = run_with_stdin(
        bin().arg("-"),
        "Đây là **kết quả** của bạn. Xem [chi tiết](http://x.com).",
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Đây là kết quả của bạn. Xem chi tiết."
    );
}

#[test]
fn clean_file_to_output_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let input_path = tmp.path().join("in.md");
    let output_path = tmp.path().join("out.txt");
    std::fs::write(&input_path, "### Tiêu đề\nNội dung `code` ở đây.").expect("write input");

    let output = bin()
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .expect("binary not found - run cargo build first");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let written = std::fs::read_to_string(&output_path).expect("read output file");
    assert_eq!(written, "Tiêu đề\nNội dung code ở đây.");
}

#[test]
fn rewrite_without_api_key_exits_with_error() {
    // Point HOME/XDG at an empty temp dir so no stored key file is found,
    // and run from there so dotenv() won't load .env from the project root.
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = run_with_stdin(
        bin()
            .arg("--rewrite")
            .arg("-")
            .current_dir(tmp.path())
            .env("HOME", tmp.path())
            .env("XDG_CONFIG_HOME", tmp.path()),
        "some **text** to rewrite",
    );

    assert!(
        !output.status.success(),
        "expected failure when OPENROUTER_API_KEY is not set"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENROUTER_API_KEY"),
        "expected API key error message, got: {}",
        stderr
    );
}

#[test]
fn completions_bash_outputs_script() {
    let output = bin()
        .args(["completions", "bash"])
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ai-text-cleaner") || stdout.contains("_ai_text_cleaner"));
}
