//! Input validation: project names, destination paths, repository URLs

use std::time::Duration;

/// Timeout for URL reachability checks
const HEAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of validating a project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCheck {
    Valid,
    Invalid(&'static str),
}

impl NameCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, NameCheck::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            NameCheck::Valid => None,
            NameCheck::Invalid(msg) => Some(msg),
        }
    }
}

/// Validate a project name: 2-50 characters from [A-Za-z0-9_-]
pub fn project_name(name: &str) -> NameCheck {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return NameCheck::Invalid("Project name cannot be empty");
    }
    if name.len() < 2 {
        return NameCheck::Invalid("Project name must be at least 2 characters");
    }
    if name.len() > 50 {
        return NameCheck::Invalid("Project name cannot exceed 50 characters");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return NameCheck::Invalid(
            "Project name may only contain letters, digits, hyphens and underscores",
        );
    }
    NameCheck::Valid
}

/// Validate a destination path.
///
/// Colons stay allowed for Windows drive letters; the rest of the usual
/// forbidden set is rejected.
pub fn destination_path(path: &str) -> bool {
    !path.chars().any(|c| matches!(c, '<' | '>' | '"' | '|' | '?' | '*'))
}

/// Check whether a GitHub URL is reachable, optionally with a token.
///
/// Only status 200 counts as reachable; any other status or network
/// failure simply reports `false`.
pub async fn github_url_reachable(url: &str, token: Option<&str>) -> bool {
    let Ok(client) = reqwest::Client::builder()
        .user_agent("nextjs-cli")
        .timeout(HEAD_TIMEOUT)
        .build()
    else {
        return false;
    };

    let mut request = client.head(url);
    if let Some(token) = token {
        request = request.header("Authorization", format!("token {}", token));
    }

    match request.send().await {
        Ok(response) => response.status() == reqwest::StatusCode::OK,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_project_names() {
        assert!(project_name("my-app").is_valid());
        assert!(project_name("my_app_2").is_valid());
        assert!(project_name("ab").is_valid());
    }

    #[test]
    fn test_empty_and_short_names_rejected() {
        assert!(!project_name("").is_valid());
        assert!(!project_name("   ").is_valid());
        assert!(!project_name("a").is_valid());
    }

    #[test]
    fn test_long_name_rejected() {
        let name = "a".repeat(51);
        assert!(!project_name(&name).is_valid());
        assert!(project_name(&"a".repeat(50)).is_valid());
    }

    #[test]
    fn test_invalid_characters_rejected() {
        assert!(!project_name("my app").is_valid());
        assert!(!project_name("my/app").is_valid());
        assert!(!project_name("my.app").is_valid());
        assert!(project_name("my-app").message().is_none());
    }

    #[test]
    fn test_destination_path_rules() {
        assert!(destination_path("/home/dev/projects/my-app"));
        assert!(destination_path("C:\\Users\\dev\\my-app"));
        assert!(!destination_path("bad<path"));
        assert!(!destination_path("what?"));
        assert!(!destination_path("glob*"));
    }

    /// Serve a single HTTP response on loopback and return the URL to hit
    async fn one_shot_server(status_line: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            let response = format!("HTTP/1.1 {}\r\ncontent-length: 0\r\n\r\n", status_line);
            let _ = stream.write_all(response.as_bytes()).await;
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_status_200_is_reachable() {
        let url = one_shot_server("200 OK").await;
        assert!(github_url_reachable(&url, None).await);
    }

    #[tokio::test]
    async fn test_other_2xx_statuses_are_not_reachable() {
        // Only an exact 200 counts
        let url = one_shot_server("204 No Content").await;
        assert!(!github_url_reachable(&url, None).await);
    }

    #[tokio::test]
    async fn test_unreachable_host_reports_false() {
        assert!(!github_url_reachable("http://127.0.0.1:1", None).await);
    }
}
