use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use graphweave_cli::{
    cli::{Cli, Commands},
    commands,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let level = cli.level().to_string().to_lowercase();
    let env_filter = format!("graphweave_cli={},graphweave_config={}", level, level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Resolve { file, format } => commands::resolve::execute(file, format).await,
        Commands::Kinds { format } => commands::kinds::execute(format).await,
        Commands::Init { path, force } => commands::init::execute(path, force).await,
    }
}
