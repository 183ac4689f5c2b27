//! Domain authorization core.
//!
//! Decides whether the holder of a role may read or write a domain, a
//! tenant-scoped resource named by a [`DomainId`].
//!
//! # Overview
//!
//! A [`Role`] is a bound policy object with two pure predicates,
//! [`Role::domain_read`] and [`Role::domain_write`]. Everything a role needs
//! to decide is fixed when it is constructed, so checks never block, fail,
//! or touch external state, and a role can be shared freely across threads.
//!
//! Denial is `false`, not an error. Callers that want a `Result` can use
//! [`Role::require`], which maps `false` to [`Error::Forbidden`].
//!
//! Roles available today:
//!
//! - [`EditorRole`]: reads exactly its bound domain, never writes.
//!
//! # Example
//!
//! ```
//! use permissions::{CapabilityRequest, EditorRole, Grant, Role};
//!
//! let role = EditorRole::new("org-42");
//! assert!(role.domain_read("org-42"));
//! assert!(!role.domain_read("org-43"));
//! assert!(!role.domain_write("org-42"));
//!
//! // Grants resolved elsewhere bind to the same roles.
//! let bound = Grant::editor("org-42").bind();
//! assert!(bound.require(&CapabilityRequest::domain_read("org-42")).is_ok());
//! assert!(bound.require(&CapabilityRequest::domain_write("org-42")).is_err());
//! ```

mod capability;
mod domain;
mod editor;
mod error;
mod grant;
mod role;

pub use capability::{Capability, CapabilityRequest};
pub use domain::DomainId;
pub use editor::EditorRole;
pub use error::{Error, Result};
pub use grant::{BoundRole, EDITOR, Grant, RoleKind};
pub use role::Role;
