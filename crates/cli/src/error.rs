//! CLI error types.

use permissions::{Capability, DomainId};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The grant table file does not exist.
    #[error("grant table not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// No grant exists for the identity.
    #[error("no grant found for identity '{identity}'")]
    GrantNotFound { identity: String },

    /// The identity holds more than one grant.
    ///
    /// Each identity must resolve to exactly one role.
    #[error("identity '{identity}' has {count} grants; expected exactly one")]
    AmbiguousGrant { identity: String, count: usize },

    /// The role denied the request.
    #[error("denied: '{identity}' may not {capability} '{domain}'")]
    Denied {
        identity: String,
        capability: Capability,
        domain: DomainId,
    },

    /// Configuration is invalid or unreadable.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An error occurred in the permissions layer.
    #[error(transparent)]
    Permissions(#[from] permissions::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
