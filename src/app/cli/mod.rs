//! CLI adapter.

use clap::Parser;

use crate::adapters::{DjangoAdminGenerator, FilesystemProjectStore};
use crate::app::AppContext;
use crate::app::commands::{collect, register, scaffold};
use crate::domain::{AppError, AppName, ProjectLayout};

#[derive(Parser)]
#[command(name = "appforge")]
#[command(version)]
#[command(
    about = "Scaffold Django apps into apps/ and register them in project settings",
    long_about = None
)]
struct Cli {
    /// App names to scaffold; prompts interactively when omitted
    names: Vec<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let names: Vec<AppName> = if cli.names.is_empty() {
        collect::execute()?
    } else {
        cli.names.into_iter().map(AppName::new).collect()
    };

    if names.is_empty() {
        println!("No apps to scaffold");
        return Ok(());
    }

    for name in &names {
        if !name.is_python_identifier() {
            println!("⚠️  '{}' is not a valid Python identifier", name);
        }
    }

    let ctx = AppContext::new(
        ProjectLayout::current()?,
        DjangoAdminGenerator::from_env(),
        FilesystemProjectStore::new(),
    );

    scaffold::execute(&ctx, &names)?;
    register::execute(&ctx, &names)?;
    Ok(())
}
