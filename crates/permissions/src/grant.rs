//! Role catalogue and grant binding.

use crate::{DomainId, EditorRole, Error, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire name of the editor role.
pub const EDITOR: &str = "editor";

/// Known role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum RoleKind {
    Editor,
}

impl RoleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Editor => EDITOR,
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EDITOR => Ok(RoleKind::Editor),
            other => Err(Error::UnknownRole(other.to_string())),
        }
    }
}

/// Binding data for one role instance: which role, scoped to which domain.
///
/// Looking up the grant for an identity is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub role: RoleKind,
    pub domain: DomainId,
}

impl Grant {
    pub fn new(role: RoleKind, domain: impl Into<DomainId>) -> Self {
        Self {
            role,
            domain: domain.into(),
        }
    }

    pub fn editor(domain: impl Into<DomainId>) -> Self {
        Self::new(RoleKind::Editor, domain)
    }

    /// Construct the role this grant describes.
    pub fn bind(&self) -> BoundRole {
        match self.role {
            RoleKind::Editor => BoundRole::Editor(EditorRole::new(self.domain.clone())),
        }
    }
}

/// A role instance produced from a [`Grant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundRole {
    Editor(EditorRole),
}

impl BoundRole {
    pub fn kind(&self) -> RoleKind {
        match self {
            BoundRole::Editor(_) => RoleKind::Editor,
        }
    }
}

impl From<EditorRole> for BoundRole {
    fn from(role: EditorRole) -> Self {
        BoundRole::Editor(role)
    }
}

impl Role for BoundRole {
    fn domain_read(&self, id: &str) -> bool {
        match self {
            BoundRole::Editor(role) => role.domain_read(id),
        }
    }

    fn domain_write(&self, id: &str) -> bool {
        match self {
            BoundRole::Editor(role) => role.domain_write(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CapabilityRequest;

    #[test]
    fn test_parse_role_kind() {
        assert_eq!(EDITOR.parse::<RoleKind>().unwrap(), RoleKind::Editor);
        assert_eq!(
            "admin".parse::<RoleKind>().unwrap_err(),
            Error::UnknownRole("admin".to_string())
        );
        // Names are case-sensitive.
        assert!("Editor".parse::<RoleKind>().is_err());
    }

    #[test]
    fn test_bind_editor() {
        let role = Grant::editor("org-42").bind();
        assert_eq!(role.kind(), RoleKind::Editor);
        assert_eq!(role, BoundRole::Editor(EditorRole::new("org-42")));

        assert!(role.check(&CapabilityRequest::domain_read("org-42")));
        assert!(!role.check(&CapabilityRequest::domain_read("org-43")));
        assert!(!role.check(&CapabilityRequest::domain_write("org-42")));
    }

    #[test]
    fn test_bound_role_from_editor() {
        let editor = EditorRole::new("org-9");
        let bound = BoundRole::from(editor.clone());
        assert_eq!(bound, Grant::editor("org-9").bind());
        assert!(bound.domain_read(editor.domain_id().as_str()));
    }

    #[test]
    fn test_display_respects_padding() {
        assert_eq!(format!("[{:<8}]", RoleKind::Editor), "[editor  ]");
    }

    #[test]
    fn test_grant_serde() {
        let grant: Grant =
            serde_json::from_str(r#"{"role": "editor", "domain": "org-42"}"#).unwrap();
        assert_eq!(grant, Grant::editor("org-42"));

        let json = serde_json::to_value(&grant).unwrap();
        assert_eq!(json["role"], "editor");
        assert_eq!(json["domain"], "org-42");
    }

    #[test]
    fn test_grant_serde_rejects_unknown_role() {
        let result: Result<Grant, _> =
            serde_json::from_str(r#"{"role": "owner", "domain": "org-42"}"#);
        assert!(result.is_err());
    }
}
