use std::ffi::OsStr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Platform family, used only to pick how executables are named on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    Windows,
    Other,
}

const WINDOWS_SCRIPT_SUFFIXES: [&str; 2] = [".bat", ".cmd"];

impl OsFamily {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" | "win32" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }

    /// Paths to probe for an executable whose suffix-less path is `base`, in priority order.
    pub fn executable_candidates(self, base: &OsStr) -> Vec<PathBuf> {
        match self {
            OsFamily::Windows => WINDOWS_SCRIPT_SUFFIXES
                .iter()
                .map(|suffix| {
                    let mut candidate = base.to_os_string();
                    candidate.push(suffix);
                    PathBuf::from(candidate)
                })
                .collect(),
            OsFamily::Other => vec![PathBuf::from(base)],
        }
    }
}
