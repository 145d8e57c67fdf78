//! NextJS CLI - Clone NextJS template repositories and add file components

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nextjs_core::tui::{AddArgs, CreateArgs};

#[derive(Parser, Debug)]
#[command(name = "nextjs-cli")]
#[command(about = "CLI for cloning NextJS template repositories with authentication")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new NextJS project from a template
    Create(CliCreateArgs),
    /// Add a component/template to the current project
    Add(CliAddArgs),
    /// List all available template repositories
    ListRepos,
    /// List all users (for debugging)
    ListUsers,
    /// List all available components
    #[command(visible_alias = "list-comp")]
    ListComponents {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the package managers available on this system
    #[command(visible_alias = "list-pm")]
    ListPackageManagers,
    /// Validate the configuration and repository URLs
    Validate,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Project name
    pub name: Option<String>,

    /// Force a package manager (npm, pnpm, yarn, bun)
    #[arg(long = "pm", alias = "package-manager")]
    pub package_manager: Option<String>,

    /// Don't install dependencies automatically
    #[arg(long = "no-install")]
    pub no_install: bool,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Name of the component to add
    pub component: Option<String>,

    /// Force a package manager (npm, pnpm, yarn, bun)
    #[arg(long = "pm", alias = "package-manager")]
    pub package_manager: Option<String>,

    /// Don't install dependencies automatically
    #[arg(long = "no-install")]
    pub no_install: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            package_manager: args.package_manager,
            no_install: args.no_install,
        }
    }
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            component: args.component,
            package_manager: args.package_manager,
            no_install: args.no_install,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Command::Create(create_args) => nextjs_core::tui::run_create(create_args.into()).await,
        Command::Add(add_args) => nextjs_core::tui::run_add(add_args.into()).await,
        Command::ListRepos => commands::list_repos(),
        Command::ListUsers => commands::list_users(),
        Command::ListComponents { category } => commands::list_components(category.as_deref()),
        Command::ListPackageManagers => commands::list_package_managers().await,
        Command::Validate => commands::validate().await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
