//! Tests that run the compiled binary.
//!
//! The binary always requests the fixed endpoint, so these tests route it
//! through `HTTPS_PROXY` pointing at a closed local port. The request then
//! fails fast and deterministically, without touching the network. The
//! success path against the live endpoint is not exercised here; it is
//! covered at the library level in `fetch_output.rs`.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

const RUN_TIMEOUT: Duration = Duration::from_secs(30);

fn closed_proxy_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Starts the binary in `dir` with its proxy pointed at a closed port.
///
/// stdin is a pipe that stays open, so a read from it would block the run.
fn spawn_binary(dir: &TempDir, args: &[&str]) -> Child {
    let proxy = closed_proxy_url();
    Command::new(env!("CARGO_BIN_EXE_post_fetch"))
        .args(args)
        .current_dir(dir.path())
        .env("HTTPS_PROXY", &proxy)
        .env("https_proxy", &proxy)
        .env("ALL_PROXY", &proxy)
        .env_remove("NO_PROXY")
        .env_remove("no_proxy")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start post_fetch binary")
}

/// Waits for the child without closing its stdin; kills it on timeout.
fn wait_with_timeout(child: &mut Child) -> ExitStatus {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait().expect("Failed to poll child") {
            return status;
        }
        if started.elapsed() > RUN_TIMEOUT {
            let _ = child.kill();
            panic!("post_fetch did not finish within {:?}", RUN_TIMEOUT);
        }
        std::thread::sleep(Duration::from_millis(50));
    }
}

fn read_stdout(child: &mut Child) -> String {
    let mut stdout = String::new();
    child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("Failed to read stdout");
    stdout
}

#[test]
fn test_transport_failure_exits_zero() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut child = spawn_binary(&dir, &[]);

    let status = wait_with_timeout(&mut child);
    let stdout = read_stdout(&mut child);

    assert_eq!(status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.starts_with("Error: "), "got: {}", stdout);
    assert_eq!(stdout.lines().count(), 1, "got: {}", stdout);
}

#[test]
fn test_run_does_not_wait_on_stdin_or_write_files() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut child = spawn_binary(&dir, &[]);

    // stdin is never written to or closed; finishing proves it was not read
    let status = wait_with_timeout(&mut child);
    drop(child.stdin.take());
    assert!(status.success());

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .expect("Failed to list temp directory")
        .collect();
    assert!(entries.is_empty(), "unexpected files: {:?}", entries);
}

#[test]
fn test_stray_arguments_do_not_stop_the_request() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let mut child = spawn_binary(&dir, &["https://example.com/", "--bogus"]);

    let status = wait_with_timeout(&mut child);
    let stdout = read_stdout(&mut child);

    assert_eq!(status.code(), Some(0), "stdout: {}", stdout);
    assert!(stdout.starts_with("Error: "), "got: {}", stdout);
}
