use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Default file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "deployer.toml";

/// Top-level deployer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployerConfig {
    /// Hardhat artifacts directory
    #[serde(default = "default_artifacts")]
    pub artifacts: PathBuf,

    /// Profile table merged over the built-in one
    #[serde(default)]
    pub profiles: Option<PathBuf>,

    /// RPC endpoints keyed by network identifier (canonical name or alias)
    #[serde(default)]
    pub networks: BTreeMap<String, Endpoint>,
}

/// RPC endpoint of one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// RPC endpoint url
    pub url: String,

    /// Chain id the endpoint must report; overrides the profile's
    #[serde(default)]
    pub chain_id: Option<u64>,
}

fn default_artifacts() -> PathBuf {
    PathBuf::from("artifacts")
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            artifacts: default_artifacts(),
            profiles: None,
            networks: BTreeMap::new(),
        }
    }
}

impl DeployerConfig {
    /// Load from a TOML file. Relative paths inside are taken relative to
    /// the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        if let Some(base) = path.parent() {
            config.artifacts = base.join(&config.artifacts);
            config.profiles = config.profiles.map(|profiles| base.join(profiles));
        }

        Ok(config)
    }

    /// Load `path` if given, else `deployer.toml` if present, else defaults.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Endpoint for `identifier`, falling back to the canonical name.
    pub fn endpoint(&self, identifier: &str, canonical: &str) -> Option<&Endpoint> {
        self.networks
            .get(identifier)
            .or_else(|| self.networks.get(canonical))
    }
}
