use crate::{DomainId, Role};

/// Read-only access to exactly one domain.
///
/// Reads are granted iff the requested id equals the bound id. Writes are
/// never granted, whatever the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRole {
    domain_id: DomainId,
}

impl EditorRole {
    /// Bind an editor to `domain_id`. An empty id is accepted as-is.
    pub fn new(domain_id: impl Into<DomainId>) -> Self {
        Self {
            domain_id: domain_id.into(),
        }
    }

    pub fn domain_id(&self) -> &DomainId {
        &self.domain_id
    }
}

impl Role for EditorRole {
    fn domain_read(&self, id: &str) -> bool {
        self.domain_id == *id
    }

    fn domain_write(&self, _id: &str) -> bool {
        false
    }
}
