//! Template, user and component catalogs
//!
//! The catalog is the static data the CLI operates on: which template
//! repositories can be cloned, which users may access private ones, and which
//! file components can be injected into a project. It is loaded from an
//! optional `config.json` and falls back to built-in defaults.

mod defaults;
mod store;

pub use store::{config_path, CatalogError};

use serde::{Deserialize, Serialize};

/// A clonable template repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub description: String,
    pub is_private: bool,
    pub requires_auth: bool,
}

impl Repository {
    /// Private repositories always require authentication
    pub fn requires_authentication(&self) -> bool {
        self.requires_auth || self.is_private
    }
}

/// A user that may authenticate for private templates and components
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub has_private_access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

impl User {
    /// Copy of this user with the token hidden, for debug listings
    pub fn masked(&self) -> User {
        User {
            github_token: self.github_token.as_ref().map(|_| "***hidden***".to_string()),
            ..self.clone()
        }
    }
}

/// Kind of entry a component file describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// One file (or directory) written when a component is installed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFile {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default)]
    pub content: String,
}

/// An installable file component (code snippets/configs)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
    pub files: Vec<ComponentFile>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub dev_dependencies: Vec<String>,
    pub is_private: bool,
    pub requires_auth: bool,
}

impl Component {
    /// Private components always require authentication
    pub fn requires_authentication(&self) -> bool {
        self.requires_auth || self.is_private
    }
}

/// The full catalog backing the CLI
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub repositories: Vec<Repository>,
    pub users: Vec<User>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Default for Catalog {
    fn default() -> Self {
        defaults::builtin_catalog()
    }
}

impl Catalog {
    /// Load the catalog from `config.json`, falling back to the built-in
    /// defaults (with a warning) when the file is missing or malformed.
    pub fn load() -> Catalog {
        use colored::Colorize;

        match store::load_from(&store::config_path()) {
            Ok(catalog) => catalog,
            Err(CatalogError::Missing { .. }) => Catalog::default(),
            Err(e) => {
                eprintln!("{} {} - using built-in catalog", "Warning:".yellow(), e);
                Catalog::default()
            }
        }
    }

    /// Find a repository whose name contains `name` (case-insensitive)
    pub fn repository_by_name(&self, name: &str) -> Option<&Repository> {
        let needle = name.to_lowercase();
        self.repositories
            .iter()
            .find(|r| r.name.to_lowercase().contains(&needle))
    }

    /// Find a component by exact name or display-name substring (case-insensitive)
    pub fn component_by_name(&self, name: &str) -> Option<&Component> {
        let needle = name.to_lowercase();
        self.components.iter().find(|c| {
            c.name.to_lowercase() == needle || c.display_name.to_lowercase().contains(&needle)
        })
    }

    /// Components in a category (case-insensitive)
    pub fn components_by_category(&self, category: &str) -> Vec<&Component> {
        self.components
            .iter()
            .filter(|c| c.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Distinct component categories, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for component in &self.components {
            if !seen.contains(&component.category.as_str()) {
                seen.push(component.category.as_str());
            }
        }
        seen
    }
}
