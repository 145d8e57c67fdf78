//! Detection of the package manager an existing project already uses
//!
//! Evidence is checked in a fixed priority order, first match wins:
//!
//! 1. Lock artifacts in the project root (strongest signal)
//! 2. `package.json` hints: manager names appearing in `scripts`, then the
//!    `packageManager` field
//!
//! The detector is a pure filesystem query: it never mutates the project and
//! treats a missing or malformed manifest as "no signal" rather than an error.

use super::{PackageManager, DESCRIPTORS};
use serde_json::Value;
use std::path::Path;

/// Detect which package manager owns the project at `project_path`
pub fn detect_project_manager(project_path: &Path) -> Option<PackageManager> {
    // Lock files are the strongest evidence
    for descriptor in &DESCRIPTORS {
        if project_path.join(descriptor.lock_file).exists() {
            return Some(descriptor.name);
        }
    }

    // Fall back to package.json hints
    let manifest = read_manifest(project_path)?;

    if let Some(scripts) = manifest.get("scripts") {
        if let Some(found) = scan_scripts(scripts) {
            return Some(found);
        }
    }

    if let Some(spec) = manifest.get("packageManager").and_then(Value::as_str) {
        return match_manager_spec(spec);
    }

    None
}

/// Read and parse `package.json`; any failure is treated as absence of signal
fn read_manifest(project_path: &Path) -> Option<Value> {
    let content = std::fs::read_to_string(project_path.join("package.json")).ok()?;
    serde_json::from_str(&content).ok()
}

/// Search the serialized scripts value for manager names. The value is
/// scanned whatever its JSON type is.
///
/// npm is deliberately excluded here: "npm" is too generic a substring and
/// would match e.g. "pnpm" commands. It is only matched via the
/// `packageManager` field below.
fn scan_scripts(scripts: &Value) -> Option<PackageManager> {
    let serialized = serde_json::to_string(scripts).ok()?;
    for manager in [PackageManager::Pnpm, PackageManager::Yarn, PackageManager::Bun] {
        if serialized.contains(manager.as_str()) {
            return Some(manager);
        }
    }
    None
}

/// Match a `packageManager` field value of the form `<name>@<version>`
fn match_manager_spec(spec: &str) -> Option<PackageManager> {
    DESCRIPTORS
        .iter()
        .map(|d| d.name)
        .find(|m| spec.starts_with(&format!("{}@", m.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) {
        fs::write(dir.path().join("package.json"), content).unwrap();
    }

    #[test]
    fn test_empty_directory_yields_no_signal() {
        let dir = TempDir::new().unwrap();
        assert_eq!(detect_project_manager(dir.path()), None);
    }

    #[test]
    fn test_lock_file_detection() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Yarn)
        );
    }

    #[test]
    fn test_lock_file_priority_follows_table_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();
        fs::write(dir.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Pnpm)
        );
    }

    #[test]
    fn test_lock_file_outranks_package_manager_field() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        write_manifest(&dir, r#"{"packageManager": "pnpm@8.6.0"}"#);
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Yarn)
        );
    }

    #[test]
    fn test_scripts_hint() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"scripts": {"dev": "pnpm next dev"}}"#);
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Pnpm)
        );
    }

    #[test]
    fn test_non_object_scripts_value_is_still_scanned() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"scripts": "pnpm run everything"}"#);
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Pnpm)
        );
    }

    #[test]
    fn test_scripts_never_match_npm() {
        // npm is excluded from the scripts scan; only the packageManager
        // field can select it.
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"scripts": {"dev": "npm run next dev"}}"#);
        assert_eq!(detect_project_manager(dir.path()), None);
    }

    #[test]
    fn test_scripts_miss_falls_through_to_package_manager_field() {
        let dir = TempDir::new().unwrap();
        write_manifest(
            &dir,
            r#"{"scripts": {"dev": "next dev"}, "packageManager": "bun@1.1.0"}"#,
        );
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Bun)
        );
    }

    #[test]
    fn test_package_manager_field_matches_npm() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"packageManager": "npm@10.2.4"}"#);
        assert_eq!(
            detect_project_manager(dir.path()),
            Some(PackageManager::Npm)
        );
    }

    #[test]
    fn test_package_manager_field_requires_at_separator() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, r#"{"packageManager": "pnpm"}"#);
        assert_eq!(detect_project_manager(dir.path()), None);
    }

    #[test]
    fn test_malformed_manifest_is_swallowed() {
        let dir = TempDir::new().unwrap();
        write_manifest(&dir, "{ not json");
        assert_eq!(detect_project_manager(dir.path()), None);
    }
}
