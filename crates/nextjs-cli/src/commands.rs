//! Non-interactive listing and validation commands

use anyhow::Result;
use colored::Colorize;
use nextjs_core::{catalog::Catalog, pm, validate as validation};
use std::path::PathBuf;

/// List all configured template repositories
pub fn list_repos() -> Result<()> {
    println!("{}", "Available repositories:".blue().bold());
    println!();

    let catalog = Catalog::load();
    for repo in &catalog.repositories {
        let visibility = if repo.is_private { "private" } else { "public" };
        println!("{} [{}]", repo.name.cyan(), visibility);
        println!("  {}", repo.description.dimmed());
        println!("  {}", format!("URL: {}", repo.url).dimmed());
        println!();
    }

    Ok(())
}

/// List all users with masked tokens (for debugging)
pub fn list_users() -> Result<()> {
    println!("{}", "Users:".blue().bold());
    println!();

    let catalog = Catalog::load();
    for user in &catalog.users {
        let user = user.masked();
        println!("{} ({})", user.username.cyan(), user.email);
        println!("  {}", format!("ID: {}", user.id).dimmed());
        println!(
            "  {}",
            format!(
                "Private access: {}",
                if user.has_private_access { "yes" } else { "no" }
            )
            .dimmed()
        );
        println!(
            "  {}",
            format!(
                "Token: {}",
                user.github_token.as_deref().unwrap_or("not set")
            )
            .dimmed()
        );
        println!();
    }

    Ok(())
}

/// List components, optionally filtered by category, grouped by category
pub fn list_components(category: Option<&str>) -> Result<()> {
    println!("{}", "Available components:".blue().bold());
    println!();

    let catalog = Catalog::load();
    let components: Vec<_> = match category {
        Some(cat) => {
            println!("{}", format!("Category: {}", cat).cyan());
            println!();
            catalog.components_by_category(cat)
        }
        None => catalog.components.iter().collect(),
    };

    if components.is_empty() {
        println!("{}", "No components found for this category.".yellow());
        return Ok(());
    }

    for cat in catalog.categories() {
        let in_category: Vec<_> = components
            .iter()
            .filter(|c| c.category.eq_ignore_ascii_case(cat))
            .collect();
        if in_category.is_empty() {
            continue;
        }

        println!("{}", cat.to_uppercase().magenta().bold());
        for component in in_category {
            let visibility = if component.is_private { "private" } else { "public" };
            println!("  {} [{}]", component.name.cyan(), visibility);
            println!("    {}", component.display_name.dimmed());
            println!("    {}", component.description.dimmed());
            if !component.dependencies.is_empty() {
                println!(
                    "    {}",
                    format!("Dependencies: {}", component.dependencies.join(", ")).dimmed()
                );
            }
            println!();
        }
    }

    println!("{}", "Usage:".green());
    println!("  nextjs-cli add <component-name>");
    println!("  nextjs-cli add  # for interactive selection");

    Ok(())
}

/// Show the availability, version and recommendation for each package manager
pub async fn list_package_managers() -> Result<()> {
    println!("{}", "Available package managers:".blue().bold());
    println!();

    let statuses = pm::probe_all().await;
    let recommended = pm::recommend_from(&statuses);

    for status in &statuses {
        let descriptor = status.manager.descriptor();
        let marker = if status.available { "[ok]".green() } else { "[--]".red() };
        let recommended_text = if status.manager == recommended {
            " (recommended)"
        } else {
            ""
        };
        let version_text = status
            .version
            .as_deref()
            .map(|v| format!(" - v{}", v))
            .unwrap_or_default();

        println!(
            "{} {}{}{}",
            marker,
            status.manager.to_string().cyan(),
            recommended_text,
            version_text
        );
        println!("   {}", descriptor.display_name.dimmed());
        if status.available {
            println!(
                "   {}",
                format!("Install: {} <package>", descriptor.install_command).dimmed()
            );
            println!(
                "   {}",
                format!("Dev install: {} <package>", descriptor.dev_install_command).dimmed()
            );
        }
        println!();
    }

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match pm::detect_project_manager(&current_dir) {
        Some(manager) => println!(
            "{}",
            format!("Package manager detected in this project: {}", manager).green()
        ),
        None => println!("{}", "No package manager detected in this project".yellow()),
    }

    Ok(())
}

/// Check that every configured repository URL is reachable
pub async fn validate() -> Result<()> {
    println!("{}", "Validating configuration".blue().bold());
    println!();

    let catalog = Catalog::load();

    // Private repositories are checked with the admin token
    let admin_token = catalog
        .users
        .iter()
        .find(|u| u.username == "admin")
        .and_then(|u| u.github_token.clone());

    println!("{}", "Repository validation:".cyan());
    for repo in &catalog.repositories {
        let token = if repo.is_private {
            admin_token.as_deref()
        } else {
            None
        };

        if validation::github_url_reachable(&repo.url, token).await {
            println!("  {} {} - reachable", "ok".green(), repo.name);
        } else {
            println!(
                "  {} {} - not reachable (invalid URL or token required)",
                "warn".yellow(),
                repo.name
            );
        }
    }

    // Users are only sanity-checked for private access consistency
    let inconsistent: Vec<_> = catalog
        .users
        .iter()
        .filter(|u| u.has_private_access && u.github_token.is_none())
        .collect();
    if !inconsistent.is_empty() {
        println!();
        println!("{}", "User validation:".cyan());
        for user in inconsistent {
            println!(
                "  {} {} has private access but no token",
                "warn".yellow(),
                user.username
            );
        }
    }

    println!();
    println!("{}", "Validation complete".green());

    Ok(())
}
