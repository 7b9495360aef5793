pub mod errors;

pub mod artifact;
pub mod command;
pub mod env;
pub mod locate;
pub mod plan;
pub mod platform;
pub mod tool;

pub use artifact::BuildArtifact;
pub use command::{DEFAULT_DEBUG_PORT, StartParams, start_args, start_command};
pub use env::{EnvSource, ProcessEnv};
pub use errors::BuildToolError;
pub use locate::{GRADLE_HOME_VAR, locate_executable, locate_gradle};
pub use plan::LaunchPlan;
pub use platform::OsFamily;
pub use tool::{BuildTool, GradleBuildTool};

#[cfg(test)]
pub(crate) fn unique_temp_dir(prefix: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("micro-tools-{prefix}-{nanos}"))
}
