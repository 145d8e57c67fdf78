//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod add;
mod create;

pub use add::{run_add, AddArgs};
pub use create::{run_create, CreateArgs};

use crate::pm::{ManagerStatus, PackageManager};
use anyhow::Result;

/// Validate a `--pm` override against the probed environment.
///
/// An unavailable forced manager is the one hard stop in package manager
/// handling: proceeding would silently run a nonexistent command, so the
/// user gets a listing of what is actually installed and a non-zero exit.
fn resolve_forced_manager(
    forced: &str,
    available: &[ManagerStatus],
) -> Result<PackageManager> {
    let manager: PackageManager = forced.parse()?;

    if available.iter().any(|s| s.available && s.manager == manager) {
        cliclack::log::info(format!("Forced package manager: {}", manager))?;
        return Ok(manager);
    }

    cliclack::log::error(format!(
        "Package manager \"{}\" is not available or not installed.",
        manager
    ))?;
    if available.is_empty() {
        cliclack::log::warning("No package managers were detected on this system.")?;
    } else {
        let listing: Vec<String> = available
            .iter()
            .map(|s| {
                format!(
                    "{} - v{}",
                    s.manager,
                    s.version.as_deref().unwrap_or("unknown")
                )
            })
            .collect();
        cliclack::log::warning(format!("Available package managers:\n{}", listing.join("\n")))?;
    }

    anyhow::bail!("Package manager \"{}\" is unavailable", manager)
}

/// Prompt for a package manager when several are available
fn select_package_manager(
    available: &[ManagerStatus],
    recommended: PackageManager,
) -> Result<PackageManager> {
    let mut select = cliclack::select("Choose your package manager");
    for status in available {
        let descriptor = status.manager.descriptor();
        let label = if status.manager == recommended {
            format!("{} (recommended)", descriptor.display_name)
        } else {
            descriptor.display_name.to_string()
        };
        select = select.item(
            status.manager,
            label,
            format!("v{}", status.version.as_deref().unwrap_or("unknown")),
        );
    }

    Ok(select.initial_value(recommended).interact()?)
}
