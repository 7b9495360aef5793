use serde::{Deserialize, Serialize};

use crate::artifact::BuildArtifact;

pub const START_TASK: &str = "microStart";
pub const DEFAULT_DEBUG_PORT: &str = "5005";

const CONTEXT_ROOT_PROPERTY: &str = "-DpayaraMicro.contextRoot=";
const PAYARA_VERSION_PROPERTY: &str = "-DpayaraMicro.payaraVersion=";
const DEBUG_AGENT_PROPERTY: &str =
    "-Ddebug=-agentlib:jdwp=transport=dt_socket,server=y,suspend=n,address=";

/// Caller supplied values for a start invocation. Only blank checks are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartParams {
    pub context_path: Option<String>,
    pub payara_version: Option<String>,
    pub debug_port: String,
}

impl StartParams {
    pub fn new(debug_port: impl Into<String>) -> Self {
        Self {
            debug_port: debug_port.into(),
            ..Self::default()
        }
    }

    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = Some(context_path.into());
        self
    }

    pub fn with_payara_version(mut self, version: impl Into<String>) -> Self {
        self.payara_version = Some(version.into());
        self
    }
}

/// Gradle arguments that build `artifact` and start it with a debug agent attached.
///
/// Order is fixed: artifact tasks, `microStart`, context root, Payara version,
/// debug agent. Values are passed through verbatim; the debug port is not
/// checked to be numeric.
pub fn start_args(artifact: BuildArtifact, params: &StartParams) -> Vec<String> {
    let mut args: Vec<String> = artifact
        .task_args()
        .iter()
        .map(|arg| arg.to_string())
        .collect();
    args.push(START_TASK.to_string());

    if let Some(context_path) = non_blank(params.context_path.as_deref()) {
        args.push(format!("{CONTEXT_ROOT_PROPERTY}{context_path}"));
    }
    if let Some(version) = non_blank(params.payara_version.as_deref()) {
        args.push(format!("{PAYARA_VERSION_PROPERTY}{version}"));
    }
    args.push(format!("{DEBUG_AGENT_PROPERTY}{}", params.debug_port));
    args
}

/// Single-line form of [`start_args`], tokens joined by one space.
pub fn start_command(artifact: BuildArtifact, params: &StartParams) -> String {
    start_args(artifact, params).join(" ")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
