use std::ffi::{OsStr, OsString};
use std::path::{MAIN_SEPARATOR_STR, PathBuf, is_separator};

use log::{debug, info};

use crate::env::EnvSource;
use crate::errors::BuildToolError;
use crate::platform::OsFamily;

pub const GRADLE_HOME_VAR: &str = "GRADLE_HOME";
const GRADLE_EXECUTABLE: &str = "gradle";
const BIN_DIR_NAME: &str = "bin";

pub fn locate_gradle(env: &impl EnvSource, os: OsFamily) -> Result<PathBuf, BuildToolError> {
    locate_executable(env, os, GRADLE_HOME_VAR, GRADLE_EXECUTABLE)
}

/// Resolves `$<home_var>/bin/<name>` to an existing executable.
///
/// Every call probes the file system again; nothing is cached.
pub fn locate_executable(
    env: &impl EnvSource,
    os: OsFamily,
    home_var: &str,
    name: &str,
) -> Result<PathBuf, BuildToolError> {
    let home = env
        .var_os(home_var)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| BuildToolError::NotConfigured {
            var: home_var.to_string(),
        })?;

    let base = executable_base(&home, name);
    let candidates = os.executable_candidates(&base);

    let selected = candidates
        .iter()
        .find(|candidate| {
            let exists = candidate.exists();
            debug!("probing {} (exists: {exists})", candidate.display());
            exists
        })
        .cloned();
    let Some(selected) = selected else {
        return Err(BuildToolError::ExecutableNotFound {
            attempted: candidates,
        });
    };

    // The file can vanish between the probe and here.
    if !selected.exists() {
        return Err(BuildToolError::ExecutableNotFound {
            attempted: vec![selected],
        });
    }

    info!("using {name} executable at {}", selected.display());
    Ok(selected)
}

/// `<home>` + separator (only if missing) + `bin/<name>`, without a platform suffix.
fn executable_base(home: &OsStr, name: &str) -> OsString {
    let mut base = home.to_os_string();
    let has_trailing_separator = home
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(is_separator);
    if !has_trailing_separator {
        base.push(MAIN_SEPARATOR_STR);
    }
    base.push(BIN_DIR_NAME);
    base.push(MAIN_SEPARATOR_STR);
    base.push(name);
    base
}
