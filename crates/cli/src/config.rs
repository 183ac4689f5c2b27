//! Grant table loading from authz.toml.

use permissions::{DomainId, Grant, RoleKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Identity-to-role assignments.
    #[serde(default)]
    pub grants: Vec<GrantEntry>,
}

/// One row of the grant table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GrantEntry {
    /// Caller identity the grant belongs to.
    pub identity: String,

    /// Role name (currently only "editor").
    pub role: RoleKind,

    /// Domain the role is scoped to.
    pub domain: DomainId,
}

impl GrantEntry {
    pub fn grant(&self) -> Grant {
        Grant::new(self.role, self.domain.clone())
    }
}

/// Outcome of looking up an identity in the grant table.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a GrantEntry),
    NotFound,
    Ambiguous(usize),
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        debug!(
            path = %path.as_ref().display(),
            grants = config.grants.len(),
            "loaded grant table"
        );
        Ok(config)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Find the single grant held by `identity`.
    pub fn lookup(&self, identity: &str) -> Lookup<'_> {
        let matching: Vec<_> = self
            .grants
            .iter()
            .filter(|g| g.identity == identity)
            .collect();

        match matching.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(matching[0]),
            n => Lookup::Ambiguous(n),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
