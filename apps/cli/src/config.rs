use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use micro_tools::{BuildArtifact, DEFAULT_DEBUG_PORT, EnvSource, StartParams};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "micro.toml";

const ARTIFACT_VAR: &str = "MICRO_ARTIFACT";
const CONTEXT_ROOT_VAR: &str = "MICRO_CONTEXT_ROOT";
const PAYARA_VERSION_VAR: &str = "MICRO_PAYARA_VERSION";
const DEBUG_PORT_VAR: &str = "MICRO_DEBUG_PORT";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MicroConfig {
    pub start: StartConfig,
}

/// `[start]` table of `micro.toml`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub artifact: Option<String>,
    pub context_root: Option<String>,
    pub payara_version: Option<String>,
    pub debug_port: Option<String>,
}

/// Values passed on the command line; they win over env and file.
#[derive(Debug, Default, Clone)]
pub struct StartOverrides {
    pub artifact: Option<String>,
    pub context_root: Option<String>,
    pub payara_version: Option<String>,
    pub debug_port: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSettings {
    pub artifact: BuildArtifact,
    pub params: StartParams,
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// A missing `micro.toml` is fine and yields defaults.
pub fn load_micro_config(root: &Path) -> Result<MicroConfig> {
    let path = config_path(root);
    if !path.exists() {
        return Ok(MicroConfig::default());
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_micro_config(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_micro_config(text: &str) -> Result<MicroConfig> {
    Ok(toml::from_str(text)?)
}

/// Flag, then `MICRO_*` env var, then `micro.toml`, then built-in default.
pub fn resolve_start_settings(
    config: &MicroConfig,
    overrides: StartOverrides,
    env: &impl EnvSource,
) -> Result<StartSettings> {
    let file = config.start.clone();

    let artifact = match pick(overrides.artifact, env, ARTIFACT_VAR, file.artifact) {
        Some(label) => label
            .parse::<BuildArtifact>()
            .with_context(|| format!("Invalid build artifact `{label}`"))?,
        None => BuildArtifact::Default,
    };

    let debug_port = pick(overrides.debug_port, env, DEBUG_PORT_VAR, file.debug_port)
        .unwrap_or_else(|| DEFAULT_DEBUG_PORT.to_string());

    Ok(StartSettings {
        artifact,
        params: StartParams {
            context_path: pick(
                overrides.context_root,
                env,
                CONTEXT_ROOT_VAR,
                file.context_root,
            ),
            payara_version: pick(
                overrides.payara_version,
                env,
                PAYARA_VERSION_VAR,
                file.payara_version,
            ),
            debug_port,
        },
    })
}

fn pick(
    flag: Option<String>,
    env: &impl EnvSource,
    var: &str,
    file: Option<String>,
) -> Option<String> {
    normalize_optional(flag)
        .or_else(|| normalize_optional(env.var(var)))
        .or_else(|| normalize_optional(file))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|val| {
        let trimmed = val.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn no_env() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn defaults_without_file_env_or_flags() {
        let settings =
            resolve_start_settings(&MicroConfig::default(), StartOverrides::default(), &no_env())
                .expect("resolve settings");
        assert_eq!(settings.artifact, BuildArtifact::Default);
        assert_eq!(settings.params, StartParams::new(DEFAULT_DEBUG_PORT));
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let config = parse_micro_config(
            r#"
            [start]
            artifact = "UBER_JAR"
            context_root = "/from-file"
            payara_version = "5.2021.1"
            debug_port = "7000"
            "#,
        )
        .expect("parse micro.toml");
        let env = BTreeMap::from([
            (CONTEXT_ROOT_VAR.to_string(), "/from-env".to_string()),
            (DEBUG_PORT_VAR.to_string(), "8000".to_string()),
        ]);
        let overrides = StartOverrides {
            debug_port: Some("9009".to_string()),
            ..StartOverrides::default()
        };

        let settings = resolve_start_settings(&config, overrides, &env).expect("resolve settings");
        assert_eq!(settings.artifact, BuildArtifact::UberJar);
        assert_eq!(settings.params.context_path.as_deref(), Some("/from-env"));
        assert_eq!(settings.params.payara_version.as_deref(), Some("5.2021.1"));
        assert_eq!(settings.params.debug_port, "9009");
    }

    #[test]
    fn blank_values_fall_through() {
        let env = BTreeMap::from([(ARTIFACT_VAR.to_string(), "  ".to_string())]);
        let overrides = StartOverrides {
            context_root: Some(" ".to_string()),
            ..StartOverrides::default()
        };
        let settings = resolve_start_settings(&MicroConfig::default(), overrides, &env)
            .expect("resolve settings");
        assert_eq!(settings.artifact, BuildArtifact::Default);
        assert_eq!(settings.params.context_path, None);
    }

    #[test]
    fn unknown_artifact_is_rejected() {
        let overrides = StartOverrides {
            artifact: Some("ear".to_string()),
            ..StartOverrides::default()
        };
        let err = resolve_start_settings(&MicroConfig::default(), overrides, &no_env())
            .expect_err("ear is not a build artifact");
        assert!(err.to_string().contains("ear"));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = std::env::temp_dir().join("micro-cli-no-config-dir-that-does-not-exist");
        let config = load_micro_config(&dir).expect("load config");
        assert!(config.start.artifact.is_none());
    }
}
