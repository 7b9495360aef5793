use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::BuildToolError;

const PLAN_DIR_NAME: &str = ".micro";
const PLAN_FILE_NAME: &str = "launch.json";

/// Everything a process launcher needs to start the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub cwd: PathBuf,      // project directory
    pub program: PathBuf,  // resolved build tool executable
    pub argv: Vec<String>, // e.g. ["war", "-DpayaraMicro.deployWar=true", "microStart", ...]
}

impl LaunchPlan {
    pub fn new(cwd: impl Into<PathBuf>, program: impl Into<PathBuf>, argv: Vec<String>) -> Self {
        Self {
            cwd: cwd.into(),
            program: program.into(),
            argv,
        }
    }

    pub fn to_command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy().to_string())
            .chain(self.argv.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(PLAN_DIR_NAME).join(PLAN_FILE_NAME)
    }

    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf, BuildToolError> {
        let path = Self::path_in(dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    pub fn read_from_dir(dir: &Path) -> Result<Self, BuildToolError> {
        let bytes = fs::read(Self::path_in(dir))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
