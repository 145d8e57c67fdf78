//! Installing file components into an existing project

use crate::catalog::{Component, FileKind};
use std::path::Path;

/// Outcome of a component installation - reported, never raised
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub success: bool,
    pub message: String,
}

impl InstallOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Write a component's files into the target project.
///
/// The target must be a NextJS project: a `package.json` listing `next` in
/// its dependencies or devDependencies.
pub async fn install_component(component: &Component, target_path: &Path) -> InstallOutcome {
    let manifest_path = target_path.join("package.json");
    if !manifest_path.exists() {
        return InstallOutcome::failure(
            "No package.json found. Make sure you are inside a NextJS project.",
        );
    }

    if !is_nextjs_project(&manifest_path) {
        return InstallOutcome::failure(
            "This is not a NextJS project: next was not found in the dependencies.",
        );
    }

    for component_file in &component.files {
        let file_path = target_path.join(&component_file.path);

        let result = match component_file.kind {
            FileKind::Directory => tokio::fs::create_dir_all(&file_path).await,
            FileKind::File => {
                if let Some(parent) = file_path.parent() {
                    if let Err(e) = tokio::fs::create_dir_all(parent).await {
                        return InstallOutcome::failure(format!(
                            "Failed to create {}: {}",
                            parent.display(),
                            e
                        ));
                    }
                }
                tokio::fs::write(&file_path, &component_file.content).await
            }
        };

        if let Err(e) = result {
            return InstallOutcome::failure(format!(
                "Failed to write {}: {}",
                file_path.display(),
                e
            ));
        }
    }

    InstallOutcome {
        success: true,
        message: format!("Component {} installed successfully!", component.display_name),
    }
}

/// A project counts as NextJS when `next` appears in (dev)dependencies
fn is_nextjs_project(manifest_path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(manifest_path) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<serde_json::Value>(&content) else {
        return false;
    };

    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| manifest.get(section).and_then(|deps| deps.get("next")).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentFile;
    use std::fs;
    use tempfile::TempDir;

    fn demo_component() -> Component {
        Component {
            name: "demo".to_string(),
            display_name: "Demo".to_string(),
            description: String::new(),
            category: "ui".to_string(),
            is_private: false,
            requires_auth: false,
            dependencies: vec![],
            dev_dependencies: vec![],
            files: vec![ComponentFile {
                path: "lib/demo.ts".to_string(),
                kind: FileKind::File,
                content: "export const demo = true\n".to_string(),
            }],
        }
    }

    fn nextjs_manifest(dir: &TempDir) {
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "demo", "dependencies": {"next": "^14.0.0"}}"#,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_install_writes_files_with_parents() {
        let dir = TempDir::new().unwrap();
        nextjs_manifest(&dir);

        let outcome = install_component(&demo_component(), dir.path()).await;
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(
            fs::read_to_string(dir.path().join("lib/demo.ts")).unwrap(),
            "export const demo = true\n"
        );
    }

    #[tokio::test]
    async fn test_install_requires_manifest() {
        let dir = TempDir::new().unwrap();
        let outcome = install_component(&demo_component(), dir.path()).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("package.json"));
    }

    #[tokio::test]
    async fn test_install_requires_nextjs_dependency() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "demo", "dependencies": {"react": "^18.0.0"}}"#,
        )
        .unwrap();

        let outcome = install_component(&demo_component(), dir.path()).await;
        assert!(!outcome.success);
        assert!(outcome.message.contains("not a NextJS project"));
    }

    #[tokio::test]
    async fn test_next_in_dev_dependencies_is_accepted() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"name": "demo", "devDependencies": {"next": "canary"}}"#,
        )
        .unwrap();

        let outcome = install_component(&demo_component(), dir.path()).await;
        assert!(outcome.success);
    }
}
