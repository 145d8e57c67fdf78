//! Recording the chosen package manager back into the project
//!
//! Both steps are best-effort: a scaffolding convenience must not abort an
//! otherwise-successful project creation over a cosmetic metadata write, so
//! every I/O failure here is swallowed.

use super::{probe_one, ManagerStatus, PackageManager};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::path::Path;

/// Set the manifest's `packageManager` field to `<name>@<version>`.
///
/// Skipped entirely when no version was observed for the manager (writing a
/// malformed field would be worse than writing none). The manifest is only
/// rewritten if it read and parsed cleanly, preserving all other fields.
pub fn update_package_json_manager(status: &ManagerStatus, project_path: &Path) {
    let Some(version) = &status.version else {
        return;
    };

    let manifest_path = project_path.join("package.json");
    let Ok(content) = std::fs::read_to_string(&manifest_path) else {
        return;
    };
    let Ok(mut manifest) = serde_json::from_str::<Value>(&content) else {
        return;
    };
    let Some(fields) = manifest.as_object_mut() else {
        return;
    };

    fields.insert(
        "packageManager".to_string(),
        Value::String(format!("{}@{}", status.manager, version)),
    );

    if let Some(serialized) = to_pretty_json(&manifest) {
        let _ = std::fs::write(&manifest_path, serialized);
    }
}

/// Create a minimal placeholder lock artifact for the chosen manager.
///
/// Only Yarn gets a placeholder (its v1 header comment); the other managers'
/// lock files are produced by a real install run, not synthesized.
pub fn create_lock_file(manager: PackageManager, project_path: &Path) {
    let lock_path = project_path.join(manager.descriptor().lock_file);
    if lock_path.exists() {
        return;
    }

    if manager == PackageManager::Yarn {
        let _ = std::fs::write(&lock_path, "# Yarn lockfile v1\n\n");
    }
}

/// Probe the chosen manager once and run both write-back steps.
///
/// The two writes are independently best-effort and not transactional.
pub async fn persist_choice(manager: PackageManager, project_path: &Path) {
    let status = probe_one(manager).await;
    update_package_json_manager(&status, project_path);
    create_lock_file(manager, project_path);
}

/// Serialize with stable 2-space indentation for reproducible manifests
fn to_pretty_json(value: &Value) -> Option<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).ok()?;
    let mut out = String::from_utf8(buf).ok()?;
    out.push('\n');
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn yarn_status(version: &str) -> ManagerStatus {
        ManagerStatus {
            manager: PackageManager::Yarn,
            available: true,
            version: Some(version.to_string()),
        }
    }

    #[test]
    fn test_round_trip_sets_field_and_preserves_others() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("package.json");
        fs::write(
            &manifest_path,
            "{\n  \"name\": \"demo\",\n  \"version\": \"0.1.0\",\n  \"dependencies\": {\n    \"next\": \"^14.0.0\"\n  }\n}\n",
        )
        .unwrap();

        update_package_json_manager(&yarn_status("1.22.19"), dir.path());

        let written = fs::read_to_string(&manifest_path).unwrap();
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["packageManager"], "yarn@1.22.19");
        assert_eq!(value["name"], "demo");
        assert_eq!(value["version"], "0.1.0");
        assert_eq!(value["dependencies"]["next"], "^14.0.0");

        // 2-space indentation, field order untouched
        assert!(written.starts_with("{\n  \"name\": \"demo\""));
        assert!(written.contains("\n  \"packageManager\": \"yarn@1.22.19\"\n"));
    }

    #[test]
    fn test_rewrite_is_stable_across_repeated_calls() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("package.json");
        fs::write(&manifest_path, r#"{"name": "demo", "scripts": {"dev": "next dev"}}"#).unwrap();

        update_package_json_manager(&yarn_status("1.22.19"), dir.path());
        let first = fs::read_to_string(&manifest_path).unwrap();
        update_package_json_manager(&yarn_status("1.22.19"), dir.path());
        let second = fs::read_to_string(&manifest_path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_version_skips_the_write() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("package.json");
        let original = r#"{"name": "demo"}"#;
        fs::write(&manifest_path, original).unwrap();

        let status = ManagerStatus {
            manager: PackageManager::Pnpm,
            available: false,
            version: None,
        };
        update_package_json_manager(&status, dir.path());

        assert_eq!(fs::read_to_string(&manifest_path).unwrap(), original);
    }

    #[test]
    fn test_corrupt_manifest_is_left_untouched() {
        let dir = TempDir::new().unwrap();
        let manifest_path = dir.path().join("package.json");
        fs::write(&manifest_path, "{ definitely not json").unwrap();

        update_package_json_manager(&yarn_status("1.22.19"), dir.path());

        assert_eq!(
            fs::read_to_string(&manifest_path).unwrap(),
            "{ definitely not json"
        );
    }

    #[test]
    fn test_missing_manifest_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        update_package_json_manager(&yarn_status("1.22.19"), dir.path());
        assert!(!dir.path().join("package.json").exists());
    }

    #[test]
    fn test_yarn_placeholder_lock_file() {
        let dir = TempDir::new().unwrap();
        create_lock_file(PackageManager::Yarn, dir.path());
        assert_eq!(
            fs::read_to_string(dir.path().join("yarn.lock")).unwrap(),
            "# Yarn lockfile v1\n\n"
        );
    }

    #[test]
    fn test_existing_lock_file_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("yarn.lock"), "real lock contents").unwrap();
        create_lock_file(PackageManager::Yarn, dir.path());
        assert_eq!(
            fs::read_to_string(dir.path().join("yarn.lock")).unwrap(),
            "real lock contents"
        );
    }

    #[tokio::test]
    async fn test_persist_choice_always_places_yarn_lock() {
        // Even when yarn is not installed (no probed version, so no manifest
        // write), the placeholder lock artifact is still created.
        let dir = TempDir::new().unwrap();
        persist_choice(PackageManager::Yarn, dir.path()).await;
        assert!(dir.path().join("yarn.lock").exists());
    }

    #[test]
    fn test_no_placeholder_for_other_managers() {
        let dir = TempDir::new().unwrap();
        for manager in [PackageManager::Pnpm, PackageManager::Bun, PackageManager::Npm] {
            create_lock_file(manager, dir.path());
            assert!(!dir.path().join(manager.descriptor().lock_file).exists());
        }
    }
}
