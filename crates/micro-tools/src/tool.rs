use std::path::{Path, PathBuf};

use crate::artifact::BuildArtifact;
use crate::command::{self, StartParams};
use crate::env::{EnvSource, ProcessEnv};
use crate::errors::BuildToolError;
use crate::locate::locate_gradle;
use crate::plan::LaunchPlan;
use crate::platform::OsFamily;

/// A build tool that can build and start a Payara Micro application.
pub trait BuildTool {
    fn executable(&self) -> Result<PathBuf, BuildToolError>;

    fn start_args(&self, artifact: BuildArtifact, params: &StartParams) -> Vec<String>;

    fn start_command(&self, artifact: BuildArtifact, params: &StartParams) -> String {
        self.start_args(artifact, params).join(" ")
    }

    /// Locates the executable and pairs it with the start arguments.
    fn launch_plan(
        &self,
        project_dir: &Path,
        artifact: BuildArtifact,
        params: &StartParams,
    ) -> Result<LaunchPlan, BuildToolError> {
        let program = self.executable()?;
        Ok(LaunchPlan::new(
            project_dir,
            program,
            self.start_args(artifact, params),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct GradleBuildTool<E = ProcessEnv> {
    env: E,
    os: OsFamily,
}

impl GradleBuildTool<ProcessEnv> {
    pub fn from_process_env() -> Self {
        Self::new(ProcessEnv, OsFamily::current())
    }
}

impl<E: EnvSource> GradleBuildTool<E> {
    pub fn new(env: E, os: OsFamily) -> Self {
        Self { env, os }
    }

    pub fn os(&self) -> OsFamily {
        self.os
    }
}

impl<E: EnvSource> BuildTool for GradleBuildTool<E> {
    fn executable(&self) -> Result<PathBuf, BuildToolError> {
        locate_gradle(&self.env, self.os)
    }

    fn start_args(&self, artifact: BuildArtifact, params: &StartParams) -> Vec<String> {
        command::start_args(artifact, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::GRADLE_HOME_VAR;
    use crate::unique_temp_dir;
    use std::collections::BTreeMap;

    #[test]
    fn launch_plan_uses_located_gradle() {
        let dir = unique_temp_dir("tool");
        let gradle = dir.join("bin").join("gradle");
        std::fs::create_dir_all(dir.join("bin")).expect("create bin dir");
        std::fs::write(&gradle, b"#!/bin/sh\n").expect("write gradle");

        let env = BTreeMap::from([(
            GRADLE_HOME_VAR.to_string(),
            dir.to_string_lossy().to_string(),
        )]);
        let tool = GradleBuildTool::new(env, OsFamily::Other);
        let params = StartParams::new("9009").with_context_path("/app");

        let plan = tool
            .launch_plan(Path::new("/work/app"), BuildArtifact::War, &params)
            .expect("build launch plan");
        assert_eq!(plan.program, gradle);
        assert_eq!(plan.cwd, PathBuf::from("/work/app"));
        assert_eq!(plan.argv[..3], ["war", "-DpayaraMicro.deployWar=true", "microStart"]);
        assert_eq!(
            tool.start_command(BuildArtifact::War, &params),
            command::start_command(BuildArtifact::War, &params)
        );

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn launch_plan_fails_without_gradle_home() {
        let env = BTreeMap::<String, String>::new();
        let tool = GradleBuildTool::new(env, OsFamily::Windows);
        let err = tool
            .launch_plan(Path::new("."), BuildArtifact::Default, &StartParams::new("5005"))
            .expect_err("GRADLE_HOME unset");
        assert!(matches!(err, BuildToolError::NotConfigured { .. }));
        assert!(err.to_string().contains(GRADLE_HOME_VAR));
    }
}
