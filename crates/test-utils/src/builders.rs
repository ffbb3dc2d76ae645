//! Small builders for launch results used across tests.

use runherd::exec::LaunchOutput;

/// A successful launch with the given stdout.
pub fn exit_ok(stdout: &str) -> LaunchOutput {
    LaunchOutput {
        exit_code: 0,
        stdout: stdout.as_bytes().to_vec(),
        stderr: Vec::new(),
    }
}

/// A failing launch with the given exit code and stderr.
pub fn exit_fail(exit_code: i32, stderr: &str) -> LaunchOutput {
    LaunchOutput {
        exit_code,
        stdout: Vec::new(),
        stderr: stderr.as_bytes().to_vec(),
    }
}
