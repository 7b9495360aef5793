use anyhow::{Context, Result};
use clap::Args;
use micro_tools::{BuildTool, GradleBuildTool};

#[derive(Args)]
pub struct LocateArgs {}

pub fn run(_args: LocateArgs) -> Result<()> {
    let tool = GradleBuildTool::from_process_env();
    tracing::debug!(os = ?tool.os(), "locating gradle");
    let path = tool.executable().context("Failed to locate Gradle")?;
    println!("{}", path.display());
    Ok(())
}
