//! Package manager resolution
//!
//! This module answers four questions about JavaScript package managers:
//!
//! - Which ones are installed on this machine? ([`probe_all`] / [`probe_available`])
//! - Which one does an existing project already use? ([`detect_project_manager`])
//! - Which one should we suggest when the project gives no answer? ([`recommended_manager`])
//! - How do we record the choice back into the project? ([`persist_choice`])
//!
//! The supported managers live in a fixed, process-wide [`DESCRIPTORS`] table;
//! everything else is a free function over that table plus the environment.

pub mod detect;
pub mod install;
pub mod persist;
pub mod policy;
pub mod probe;

use std::fmt;
use std::str::FromStr;

pub use detect::detect_project_manager;
pub use install::{install_packages, InstallReport};
pub use persist::{create_lock_file, persist_choice, update_package_json_manager};
pub use policy::{recommend_from, recommended_manager};
pub use probe::{probe_all, probe_available, probe_one};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

impl PackageManager {
    /// Canonical name used as the binary name and the persisted identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Static descriptor for this manager
    pub fn descriptor(&self) -> &'static ManagerDescriptor {
        match self {
            PackageManager::Pnpm => &DESCRIPTORS[0],
            PackageManager::Yarn => &DESCRIPTORS[1],
            PackageManager::Bun => &DESCRIPTORS[2],
            PackageManager::Npm => &DESCRIPTORS[3],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            "npm" => Ok(PackageManager::Npm),
            other => anyhow::bail!(
                "Unknown package manager '{}' (expected npm, pnpm, yarn or bun)",
                other
            ),
        }
    }
}

/// Static metadata describing one package manager
#[derive(Debug, Clone)]
pub struct ManagerDescriptor {
    /// Canonical name (also the binary invoked for probing)
    pub name: PackageManager,
    /// Human-readable label shown in prompts
    pub display_name: &'static str,
    /// Command prefix for installing runtime dependencies
    pub install_command: &'static str,
    /// Command prefix for installing dev dependencies
    pub dev_install_command: &'static str,
    /// Command used to run project scripts
    pub run_command: &'static str,
    /// Canonical lock artifact filename
    pub lock_file: &'static str,
}

/// All supported managers, in detection and preference order.
///
/// The order matters: lock-file detection, the scripts heuristic and the
/// recommendation policy all iterate this table front to back.
pub const DESCRIPTORS: [ManagerDescriptor; 4] = [
    ManagerDescriptor {
        name: PackageManager::Pnpm,
        display_name: "pnpm (Fast, disk space efficient)",
        install_command: "pnpm add",
        dev_install_command: "pnpm add -D",
        run_command: "pnpm",
        lock_file: "pnpm-lock.yaml",
    },
    ManagerDescriptor {
        name: PackageManager::Yarn,
        display_name: "Yarn (Fast, reliable, secure)",
        install_command: "yarn add",
        dev_install_command: "yarn add -D",
        run_command: "yarn",
        lock_file: "yarn.lock",
    },
    ManagerDescriptor {
        name: PackageManager::Bun,
        display_name: "Bun (Ultra-fast JavaScript runtime)",
        install_command: "bun add",
        dev_install_command: "bun add -D",
        run_command: "bun",
        lock_file: "bun.lockb",
    },
    ManagerDescriptor {
        name: PackageManager::Npm,
        display_name: "npm (Node.js default)",
        install_command: "npm install",
        dev_install_command: "npm install -D",
        run_command: "npm",
        lock_file: "package-lock.json",
    },
];

/// Probe result for one manager - created fresh on every probe, never cached
#[derive(Debug, Clone)]
pub struct ManagerStatus {
    pub manager: PackageManager,
    pub available: bool,
    pub version: Option<String>,
}
