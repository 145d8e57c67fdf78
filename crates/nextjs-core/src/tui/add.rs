//! Interactive `add` flow: inject a component into an existing project

use crate::catalog::{Catalog, Component, User};
use crate::{auth, components, pm};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Component name (prompted for when missing)
    pub component: Option<String>,

    /// Force a specific package manager (npm, pnpm, yarn, bun)
    pub package_manager: Option<String>,

    /// Skip automatic dependency installation
    pub no_install: bool,
}

/// Run the add flow with interactive prompts
pub async fn run_add(args: AddArgs) -> Result<()> {
    cliclack::intro("NextJS CLI - Add components")?;

    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if !current_dir.join("package.json").exists() {
        cliclack::log::error(
            "No package.json found. Make sure you are inside a NextJS project.",
        )?;
        anyhow::bail!("Not a NextJS project directory");
    }

    let catalog = Catalog::load();
    let manager = resolve_package_manager(&args, &current_dir).await?;
    let component = select_component(&catalog, args.component.as_deref())?;
    let _user = authenticate_if_needed(&catalog, component)?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Installing {}...", component.display_name));
    let outcome = components::install_component(component, &current_dir).await;
    if !outcome.success {
        spinner.stop(outcome.message.clone());
        anyhow::bail!("{}", outcome.message);
    }
    spinner.stop(outcome.message.clone());

    install_dependencies(&args, component, manager, &current_dir).await?;

    cliclack::outro("Component added successfully!")?;

    Ok(())
}

/// Pick the package manager for dependency installation.
///
/// Project detection beats the recommendation policy; a `--pm` override
/// beats both but is a hard stop when the forced manager is unavailable.
async fn resolve_package_manager(args: &AddArgs, project_dir: &Path) -> Result<pm::PackageManager> {
    let detected = pm::detect_project_manager(project_dir);
    let available = pm::probe_available().await;
    let fallback = detected.unwrap_or_else(|| pm::recommend_from(&available));

    if let Some(forced) = &args.package_manager {
        return super::resolve_forced_manager(forced, &available);
    }

    match detected {
        Some(manager) => {
            cliclack::log::info(format!("Detected package manager: {}", manager))?;
            Ok(manager)
        }
        None if available.len() > 1 => {
            cliclack::log::warning("No package manager detected in this project.")?;
            super::select_package_manager(&available, fallback)
        }
        None => Ok(fallback),
    }
}

fn select_component<'a>(
    catalog: &'a Catalog,
    component_name: Option<&str>,
) -> Result<&'a Component> {
    if let Some(name) = component_name {
        let Some(component) = catalog.component_by_name(name) else {
            cliclack::log::error(format!("Component \"{}\" not found.", name))?;
            let listing: Vec<String> = catalog
                .components
                .iter()
                .map(|c| format!("{} - {}", c.name, c.display_name))
                .collect();
            cliclack::log::warning(format!("Available components:\n{}", listing.join("\n")))?;
            anyhow::bail!("Unknown component \"{}\"", name);
        };
        return Ok(component);
    }

    if catalog.components.is_empty() {
        anyhow::bail!("No components configured.");
    }

    let mut select = cliclack::select("Choose a component to add");
    for (idx, component) in catalog.components.iter().enumerate() {
        let label = if component.is_private {
            format!("{} (private)", component.display_name)
        } else {
            component.display_name.clone()
        };
        select = select.item(idx, label, &component.description);
    }

    let selected_idx: usize = select.interact()?;
    Ok(&catalog.components[selected_idx])
}

fn authenticate_if_needed(catalog: &Catalog, component: &Component) -> Result<Option<User>> {
    if !component.requires_authentication() {
        return Ok(None);
    }

    cliclack::log::warning("This component requires authentication")?;

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
        spinner.stop("You do not have access to private components");
        anyhow::bail!("Private access denied for {}", user.username);
    }

    spinner.stop(format!("Logged in as {}", user.username));
    Ok(Some(user))
}

/// Show the component's dependencies and optionally install them
async fn install_dependencies(
    args: &AddArgs,
    component: &Component,
    manager: pm::PackageManager,
    project_dir: &Path,
) -> Result<()> {
    if component.dependencies.is_empty() && component.dev_dependencies.is_empty() {
        return Ok(());
    }

    let descriptor = manager.descriptor();
    let mut listing = Vec::new();
    if !component.dependencies.is_empty() {
        listing.push(format!(
            "{} {}",
            descriptor.install_command,
            component.dependencies.join(" ")
        ));
    }
    if !component.dev_dependencies.is_empty() {
        listing.push(format!(
            "{} {}",
            descriptor.dev_install_command,
            component.dev_dependencies.join(" ")
        ));
    }
    cliclack::log::info(format!("Dependencies to install:\n{}", listing.join("\n")))?;

    let confirmed: bool = cliclack::confirm("Install dependencies now?")
        .initial_value(!args.no_install)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if !component.dependencies.is_empty() {
        run_install(&component.dependencies, manager, false, project_dir).await?;
    }
    if !component.dev_dependencies.is_empty() {
        run_install(&component.dev_dependencies, manager, true, project_dir).await?;
    }

    Ok(())
}

async fn run_install(
    packages: &[String],
    manager: pm::PackageManager,
    dev: bool,
    project_dir: &Path,
) -> Result<()> {
    let kind = if dev { "dev dependencies" } else { "dependencies" };
    cliclack::log::step(format!("Installing {} with {}...", kind, manager))?;

    let report = pm::install_packages(packages, manager, dev, project_dir).await;
    if report.success {
        cliclack::log::success(report.message)?;
    } else {
        cliclack::log::error(report.message)?;
    }

    Ok(())
}
