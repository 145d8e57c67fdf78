//! NextJS Core - Shared library for the NextJS scaffolding CLI
//!
//! This library provides the functionality behind the `nextjs-cli` binary:
//! cloning template repositories (with authentication for private ones),
//! resolving and configuring the project's package manager, and injecting
//! file components into an existing project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package manager probing/detection/persistence,
//!   git cloning, catalog lookups, component file writing
//! - **Layer 2: Workflow Orchestration** - The `create` and `add` flows
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompt flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nextjs_core::pm;
//!
//! // Probe the environment and pick a package manager
//! let available = pm::probe_available().await;
//! let choice = pm::recommend_from(&available);
//! pm::persist_choice(choice, project_dir).await;
//! ```

pub mod auth;
pub mod catalog;
pub mod components;
pub mod git;
pub mod pm;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Catalog, Component, Repository, User};
pub use pm::{ManagerDescriptor, ManagerStatus, PackageManager};
