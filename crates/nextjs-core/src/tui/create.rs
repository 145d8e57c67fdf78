//! Interactive `create` flow: clone a template and configure the project

use crate::catalog::{Catalog, Repository, User};
use crate::{auth, git, pm, validate};
use anyhow::Result;
use std::path::PathBuf;

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (prompted for when missing)
    pub name: Option<String>,

    /// Force a specific package manager (npm, pnpm, yarn, bun)
    pub package_manager: Option<String>,

    /// Skip automatic dependency installation
    pub no_install: bool,
}

/// Run the create flow with interactive prompts
pub async fn run_create(args: CreateArgs) -> Result<()> {
    cliclack::intro("NextJS CLI - Project creator")?;

    let project_name = resolve_project_name(&args)?;

    // Git is required for everything that follows
    let spinner = cliclack::spinner();
    spinner.start("Checking for git...");
    if !git::is_installed() {
        spinner.stop("Git is not installed on your system");
        anyhow::bail!("Install git and try again.");
    }
    spinner.stop("Git detected");

    let catalog = Catalog::load();
    let repository = select_repository(&catalog)?;
    let user = authenticate_if_needed(&catalog, repository)?;

    // Clone into <cwd>/<name>
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let target_path = current_dir.join(&project_name);

    let spinner = cliclack::spinner();
    spinner.start(format!("Cloning {}...", repository.name));
    let report = git::clone_repository(repository, &target_path, user.as_ref()).await;
    if !report.success {
        spinner.stop(report.message.clone());
        anyhow::bail!("{}", report.message);
    }
    spinner.stop(format!("Project created in {}", target_path.display()));

    // Package manager configuration
    cliclack::log::step("Configuring the project...")?;

    let available = pm::probe_available().await;
    let recommended = pm::recommend_from(&available);

    let selected = if let Some(forced) = &args.package_manager {
        super::resolve_forced_manager(forced, &available)?
    } else if available.len() > 1 {
        super::select_package_manager(&available, recommended)?
    } else {
        recommended
    };

    // Record the choice; versions come from the probe we already ran
    if let Some(status) = available.iter().find(|s| s.manager == selected) {
        pm::update_package_json_manager(status, &target_path);
    }
    pm::create_lock_file(selected, &target_path);

    print_next_steps(&project_name, selected)?;

    Ok(())
}

fn resolve_project_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        let check = validate::project_name(name);
        if let Some(message) = check.message() {
            anyhow::bail!("{}", message);
        }
        return Ok(name.clone());
    }

    let name: String = cliclack::input("Project name")
        .validate(|input: &String| validate::project_name(input).message().map_or(Ok(()), Err))
        .interact()?;

    Ok(name)
}

fn select_repository(catalog: &Catalog) -> Result<&Repository> {
    if catalog.repositories.is_empty() {
        anyhow::bail!("No template repositories configured.");
    }

    let mut select = cliclack::select("Choose a template");
    for (idx, repo) in catalog.repositories.iter().enumerate() {
        let label = if repo.is_private {
            format!("{} (private)", repo.name)
        } else {
            repo.name.clone()
        };
        select = select.item(idx, label, &repo.description);
    }

    let selected_idx: usize = select.interact()?;
    Ok(&catalog.repositories[selected_idx])
}

/// Prompt for credentials when the selection requires them.
///
/// Returns the authenticated user for token-based cloning, or None for
/// public repositories.
fn authenticate_if_needed(catalog: &Catalog, repository: &Repository) -> Result<Option<User>> {
    if !repository.requires_authentication() {
        return Ok(None);
    }

    cliclack::log::warning("This template requires authentication")?;

    let username: String = cliclack::input("Username")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Username is required")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let spinner = cliclack::spinner();
    spinner.start("Authenticating...");
    let response = auth::authenticate(catalog, &username);

    let Some(user) = response.user else {
        spinner.stop(response.message.clone());
        anyhow::bail!("{}", response.message);
    };

    if !auth::has_private_access(&user) {
        spinner.stop("You do not have access to private templates");
        anyhow::bail!("Private access denied for {}", user.username);
    }

    spinner.stop(format!("Logged in as {}", user.username));
    Ok(Some(user))
}

fn print_next_steps(project_name: &str, manager: pm::PackageManager) -> Result<()> {
    let descriptor = manager.descriptor();

    println!();
    println!("  Next steps");
    println!();
    println!("  1.  cd {}", project_name);
    println!("  2.  {}", descriptor.install_command);
    println!("  3.  {} run dev", descriptor.run_command);
    println!();
    println!("  Package manager configured: {}", manager);

    cliclack::outro("Project created successfully!")?;

    Ok(())
}
