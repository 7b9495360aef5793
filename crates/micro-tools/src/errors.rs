use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildToolError {
    #[error("{var} is not set; point it at the build tool installation")]
    NotConfigured { var: String },

    #[error("build tool executable not found (tried {})", join_paths(.attempted))]
    ExecutableNotFound { attempted: Vec<PathBuf> },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("unknown build artifact `{0}` (expected WAR, EXPLODED_WAR, UBER_JAR or DEFAULT)")]
pub struct UnknownArtifact(pub String);

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
