use anyhow::Result;
use clap::Args;
use micro_tools::start_command;

use super::StartArgs;

#[derive(Args)]
pub struct CommandArgs {
    #[command(flatten)]
    start: StartArgs,
}

pub fn run(args: CommandArgs) -> Result<()> {
    let settings = args.start.resolve()?;
    tracing::debug!(artifact = %settings.artifact, "building start command");
    println!("{}", start_command(settings.artifact, &settings.params));
    Ok(())
}
