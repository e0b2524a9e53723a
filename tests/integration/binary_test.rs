//! Tests that run the built binary with piped stdin.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn run_stockroom(args: &[&str], stdin: &str, dir: &Path) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_stockroom"))
        .args(["--config", dir.join("config.toml").to_str().unwrap()])
        .args(args)
        .env_remove("TESTFILE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute stockroom");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_piped_session() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_stockroom(
        &["--no-history"],
        "ADD PRODUCT \"Blue Widget\" SKU123\nLIST PRODUCTS\nFOO BAR\n",
        dir.path(),
    );

    assert_eq!(code, 0, "Expected exit code 0");
    assert!(stdout.contains("SKU123\tBlue Widget\n"));
    assert!(stdout.contains("ERROR: Command not found [FOO BAR]"));
}

#[test]
fn test_history_file_written() {
    let dir = tempdir().unwrap();
    let history = dir.path().join("history.txt");
    let (code, _, _) = run_stockroom(
        &["--history-file", history.to_str().unwrap()],
        "ADD WAREHOUSE 1\nLIST WAREHOUSES\nLIST WAREHOUSE 1\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert_eq!(
        std::fs::read_to_string(&history).unwrap(),
        "ADD WAREHOUSE 1\nLIST WAREHOUSES\nLIST WAREHOUSE 1\n"
    );
}

#[test]
fn test_script_runs_before_stdin() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("fixture.txt");
    std::fs::write(&script, "ADD PRODUCT Widget W1\nADD WAREHOUSE 3 20\n").unwrap();

    let (code, stdout, _) = run_stockroom(
        &["--no-history", "--script", script.to_str().unwrap()],
        "STOCK W1 3 4\nLIST WAREHOUSE 3\n",
        dir.path(),
    );

    assert_eq!(code, 0);
    assert!(stdout.starts_with(">ADD PRODUCT Widget W1\n>ADD WAREHOUSE 3 20\n>"));
    assert!(stdout.contains("Widget\t\tW1\t\t4"));
}

#[test]
fn test_invalid_config_exits_nonzero() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[history]\nbatch_size = 0\n").unwrap();

    let (code, _, stderr) = run_stockroom(&["--no-history"], "", dir.path());

    assert_eq!(code, 1);
    assert!(stderr.contains("batch_size"));
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_stockroom(&["--help"], "", dir.path());

    assert_eq!(code, 0);
    assert!(stdout.contains("ADD WAREHOUSE"));
    assert!(stdout.contains("LIST PRODUCTS"));
}

#[cfg(unix)]
#[test]
fn test_interrupt_ends_session_with_stdin_open() {
    use std::io::Read;
    use std::time::{Duration, Instant};

    let dir = tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_stockroom"))
        .args(["--config", dir.path().join("config.toml").to_str().unwrap()])
        .arg("--no-history")
        .env_remove("TESTFILE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to execute stockroom");

    // Held open for the whole test so the session never sees EOF.
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut prompt = [0u8; 1];
    stdout.read_exact(&mut prompt).unwrap();
    assert_eq!(&prompt, b">");
    std::thread::sleep(Duration::from_millis(500));

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            panic!("stockroom still running 5s after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    assert!(status.success(), "Expected a clean exit, got {status}");
}
