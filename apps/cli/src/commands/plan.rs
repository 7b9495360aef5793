use anyhow::{Context, Result};
use clap::Args;
use micro_tools::{BuildTool, GradleBuildTool};

use super::StartArgs;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    start: StartArgs,
    /// Also save the plan to <project-dir>/.micro/launch.json
    #[arg(long)]
    write: bool,
}

pub fn run(args: PlanArgs) -> Result<()> {
    let settings = args.start.resolve()?;
    let tool = GradleBuildTool::from_process_env();
    let plan = tool
        .launch_plan(&args.start.project_dir, settings.artifact, &settings.params)
        .context("Failed to build launch plan")?;

    if args.write {
        let path = plan
            .write_to_dir(&args.start.project_dir)
            .context("Failed to write launch plan")?;
        tracing::info!("launch plan written to {}", path.display());
    }

    let json = serde_json::to_string_pretty(&plan).context("Failed to serialize launch plan")?;
    println!("{json}");
    Ok(())
}
