//! Git operations: clone templates, clean history, re-init

use crate::catalog::{Repository, User};
use crate::validate;
use std::path::Path;
use url::Url;

/// Outcome of a clone - reported, never raised
#[derive(Debug, Clone)]
pub struct CloneReport {
    pub success: bool,
    pub message: String,
}

impl CloneReport {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Check if git is installed and available in PATH
pub fn is_installed() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Clone a template repository into `target_path`.
///
/// Private repositories are cloned with the user's token injected into the
/// HTTPS URL. The clone is shallow (templates don't need history) and the
/// `.git` directory is removed afterwards so the project starts fresh.
pub async fn clone_repository(
    repository: &Repository,
    target_path: &Path,
    user: Option<&User>,
) -> CloneReport {
    if !validate::destination_path(&target_path.to_string_lossy()) {
        return CloneReport::failure("Invalid destination path");
    }

    if target_path.exists() {
        return CloneReport::failure(format!(
            "Directory {} already exists",
            target_path.display()
        ));
    }

    if let Some(parent) = target_path.parent() {
        if let Err(e) = tokio::fs::create_dir_all(parent).await {
            return CloneReport::failure(format!("Failed to create parent directory: {}", e));
        }
    }

    let clone_url = if repository.is_private {
        match user.and_then(|u| u.github_token.as_deref()) {
            Some(token) => with_token(&repository.url, token),
            None => repository.url.clone(),
        }
    } else {
        repository.url.clone()
    };

    let result = tokio::process::Command::new("git")
        .args(["clone", "--depth", "1", "--single-branch"])
        .arg(&clone_url)
        .arg(target_path)
        .output()
        .await;

    match result {
        Ok(out) if out.status.success() => {
            clean_git_history(target_path).await;
            CloneReport {
                success: true,
                message: "Clone successful".to_string(),
            }
        }
        Ok(out) => {
            let stderr = String::from_utf8_lossy(&out.stderr);
            CloneReport::failure(format!(
                "git clone failed: {}",
                stderr.lines().last().unwrap_or("unknown error")
            ))
        }
        Err(e) => CloneReport::failure(format!("Failed to run git: {}", e)),
    }
}

/// Remove the cloned `.git` directory so the template becomes a fresh project
async fn clean_git_history(target_path: &Path) {
    let git_dir = target_path.join(".git");
    if git_dir.exists() {
        // Best-effort: a leftover .git directory is cosmetic
        let _ = tokio::fs::remove_dir_all(&git_dir).await;
    }
}

/// Initialize a new git repository in the target directory
pub async fn init_repository(target_path: &Path) -> bool {
    tokio::process::Command::new("git")
        .arg("init")
        .current_dir(target_path)
        .output()
        .await
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Inject an auth token into an HTTPS GitHub URL for private clones
fn with_token(repo_url: &str, token: &str) -> String {
    match Url::parse(repo_url) {
        Ok(mut url) if url.scheme() == "https" => {
            if url.set_username(token).is_ok() {
                url.to_string()
            } else {
                repo_url.to_string()
            }
        }
        _ => repo_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_injection_into_https_url() {
        let url = with_token("https://github.com/org/repo", "ghp_abc");
        assert_eq!(url, "https://ghp_abc@github.com/org/repo");
    }

    #[test]
    fn test_token_not_injected_into_ssh_url() {
        let url = with_token("git@github.com:org/repo.git", "ghp_abc");
        assert_eq!(url, "git@github.com:org/repo.git");
    }

    #[tokio::test]
    async fn test_clone_refuses_existing_target() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = Repository {
            name: "Demo".to_string(),
            url: "https://github.com/demo/demo".to_string(),
            description: String::new(),
            is_private: false,
            requires_auth: false,
        };

        let report = clone_repository(&repo, dir.path(), None).await;
        assert!(!report.success);
        assert!(report.message.contains("already exists"));
    }
}
