use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::UnknownArtifact;

/// Packaging mode the application is built and deployed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildArtifact {
    War,
    ExplodedWar,
    UberJar,
    #[default]
    Default,
}

impl BuildArtifact {
    pub const ALL: [BuildArtifact; 4] = [
        BuildArtifact::War,
        BuildArtifact::ExplodedWar,
        BuildArtifact::UberJar,
        BuildArtifact::Default,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuildArtifact::War => "WAR",
            BuildArtifact::ExplodedWar => "EXPLODED_WAR",
            BuildArtifact::UberJar => "UBER_JAR",
            BuildArtifact::Default => "DEFAULT",
        }
    }

    /// Exact label match; anything outside the known set is `Default`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.label() == label)
            .unwrap_or(BuildArtifact::Default)
    }

    /// Gradle tasks and properties that produce this artifact, ahead of `microStart`.
    pub(crate) fn task_args(self) -> &'static [&'static str] {
        match self {
            BuildArtifact::War => &["war", "-DpayaraMicro.deployWar=true"],
            BuildArtifact::ExplodedWar => &[
                "warExplode",
                "-DpayaraMicro.deployWar=true",
                "-DpayaraMicro.exploded=true",
            ],
            BuildArtifact::UberJar => &["microBundle", "-DpayaraMicro.useUberJar=true"],
            BuildArtifact::Default => &["build"],
        }
    }
}

impl fmt::Display for BuildArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strict parse for user input: case-insensitive, `-` accepted for `_`.
impl FromStr for BuildArtifact {
    type Err = UnknownArtifact;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|artifact| artifact.label() == normalized)
            .ok_or_else(|| UnknownArtifact(value.to_string()))
    }
}
