//! Permission error types.

use crate::{Capability, DomainId};
use thiserror::Error;

/// Permission errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A role name does not match any known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A capability name does not match any known capability.
    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    /// The role denied the requested capability.
    ///
    /// Only produced by [`Role::require`](crate::Role::require); the
    /// predicates themselves report denial as `false`.
    #[error("forbidden: {capability} on domain '{domain}'")]
    Forbidden {
        capability: Capability,
        domain: DomainId,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
