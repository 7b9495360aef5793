use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{command, completion, locate, plan};

#[derive(Parser)]
#[command(
    name = "micro",
    version,
    about = "Locate Gradle and build Payara Micro start commands"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Gradle executable resolved from GRADLE_HOME
    Locate(locate::LocateArgs),
    /// Print the Gradle arguments that build and start the application
    Command(command::CommandArgs),
    /// Print the full launch plan (executable, arguments, working directory) as JSON
    Plan(plan::PlanArgs),
    /// Print a shell completion script
    Completion(completion::CompletionArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Locate(args) => locate::run(args),
        Commands::Command(args) => command::run(args),
        Commands::Plan(args) => plan::run(args),
        Commands::Completion(args) => completion::run(args),
    }
}
