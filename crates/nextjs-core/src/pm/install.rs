//! Invoking the chosen manager's install command

use super::{probe_one, PackageManager};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Outcome of an install invocation - reported, never raised
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub success: bool,
    pub message: String,
}

impl InstallReport {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Install packages with the chosen manager, streaming its output to the user.
///
/// The manager's availability is re-checked first: running a nonexistent
/// binary would fail anyway, but with a far less helpful message.
pub async fn install_packages(
    packages: &[String],
    manager: PackageManager,
    dev: bool,
    cwd: &Path,
) -> InstallReport {
    let status = probe_one(manager).await;
    if !status.available {
        return InstallReport::failure(format!("{} is not available on this system", manager));
    }

    let descriptor = manager.descriptor();
    let template = if dev {
        descriptor.dev_install_command
    } else {
        descriptor.install_command
    };

    let mut parts = template.split_whitespace();
    let Some(program) = parts.next() else {
        return InstallReport::failure(format!("Empty install command for {}", manager));
    };

    let result = Command::new(program)
        .args(parts)
        .args(packages)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await;

    match result {
        Ok(exit) if exit.success() => InstallReport {
            success: true,
            message: format!("Packages installed with {}", manager),
        },
        Ok(exit) => InstallReport::failure(format!(
            "{} exited with code {}",
            manager,
            exit.code().unwrap_or(-1)
        )),
        Err(e) => InstallReport::failure(format!("Failed to run {}: {}", manager, e)),
    }
}
