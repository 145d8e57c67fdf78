//! Availability probing for package manager binaries
//!
//! Each probe runs `<name> --version` with a bounded timeout. A manager that
//! is missing, exits non-zero, or hangs past the timeout is simply recorded
//! as unavailable - probing never fails.

use super::{ManagerStatus, PackageManager, DESCRIPTORS};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Timeout for a single version query (an unresponsive binary must not hang the CLI)
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe a single manager by running its version query
pub async fn probe_one(manager: PackageManager) -> ManagerStatus {
    let version = query_version(manager.as_str()).await;
    ManagerStatus {
        manager,
        available: version.is_some(),
        version,
    }
}

/// Run `<program> --version` and capture the trimmed stdout on success.
///
/// Spawn error, non-zero exit, or timeout all report `None`.
async fn query_version(program: &str) -> Option<String> {
    let result = timeout(
        PROBE_TIMEOUT,
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output(),
    )
    .await;

    match result {
        Ok(Ok(out)) if out.status.success() => {
            Some(String::from_utf8_lossy(&out.stdout).trim().to_string())
        }
        _ => None,
    }
}

/// Probe all supported managers, in descriptor order
pub async fn probe_all() -> Vec<ManagerStatus> {
    let mut results = Vec::with_capacity(DESCRIPTORS.len());
    for descriptor in &DESCRIPTORS {
        results.push(probe_one(descriptor.name).await);
    }
    results
}

/// Probe all managers and keep only the available ones
pub async fn probe_available() -> Vec<ManagerStatus> {
    probe_all().await.into_iter().filter(|s| s.available).collect()
}
