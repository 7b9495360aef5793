use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use micro_tools::ProcessEnv;

use crate::config::{self, StartOverrides, StartSettings};

pub mod command;
pub mod completion;
pub mod locate;
pub mod plan;

/// Options shared by every command that builds start arguments.
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Project directory holding the Gradle build and an optional micro.toml
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,
    /// WAR, EXPLODED_WAR, UBER_JAR or DEFAULT
    #[arg(long)]
    pub artifact: Option<String>,
    /// Context root the application is deployed under
    #[arg(long)]
    pub context_root: Option<String>,
    /// Payara Micro version to run
    #[arg(long)]
    pub payara_version: Option<String>,
    /// JDWP port for the debug agent
    #[arg(long)]
    pub debug_port: Option<String>,
}

impl StartArgs {
    pub fn resolve(&self) -> Result<StartSettings> {
        let config = config::load_micro_config(&self.project_dir)?;
        let overrides = StartOverrides {
            artifact: self.artifact.clone(),
            context_root: self.context_root.clone(),
            payara_version: self.payara_version.clone(),
            debug_port: self.debug_port.clone(),
        };
        config::resolve_start_settings(&config, overrides, &ProcessEnv)
    }
}
