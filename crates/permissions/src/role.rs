//! Role capability contract.

use crate::{Capability, CapabilityRequest, Error, Result};

/// A bound authorization policy.
///
/// Implementations carry everything they need to decide at construction
/// time. Both predicates must be pure: no I/O, no interior mutability,
/// total over every input (including the empty id). Read and write are
/// decided independently; neither is derived from the other.
pub trait Role: Send + Sync {
    /// Whether the holder may read the domain named `id`.
    fn domain_read(&self, id: &str) -> bool;

    /// Whether the holder may write the domain named `id`.
    fn domain_write(&self, id: &str) -> bool;

    /// Evaluate a capability request against this role.
    fn check(&self, request: &CapabilityRequest) -> bool {
        let id = request.domain.as_str();
        match request.capability {
            Capability::DomainRead => self.domain_read(id),
            Capability::DomainWrite => self.domain_write(id),
        }
    }

    /// Check a capability request, returning an error if denied.
    fn require(&self, request: &CapabilityRequest) -> Result<()> {
        if self.check(request) {
            Ok(())
        } else {
            Err(Error::Forbidden {
                capability: request.capability,
                domain: request.domain.clone(),
            })
        }
    }
}

impl<R: Role + ?Sized> Role for &R {
    fn domain_read(&self, id: &str) -> bool {
        (**self).domain_read(id)
    }

    fn domain_write(&self, id: &str) -> bool {
        (**self).domain_write(id)
    }
}

impl<R: Role + ?Sized> Role for Box<R> {
    fn domain_read(&self, id: &str) -> bool {
        (**self).domain_read(id)
    }

    fn domain_write(&self, id: &str) -> bool {
        (**self).domain_write(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainId;

    /// Grants read everywhere and write nowhere, to exercise the provided methods.
    struct ReadAll;

    impl Role for ReadAll {
        fn domain_read(&self, _id: &str) -> bool {
            true
        }

        fn domain_write(&self, _id: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_check_dispatches_on_capability() {
        let role = ReadAll;
        assert!(role.check(&CapabilityRequest::domain_read("org-1")));
        assert!(!role.check(&CapabilityRequest::domain_write("org-1")));
    }

    #[test]
    fn test_require_maps_denial_to_forbidden() {
        let role = ReadAll;
        assert!(role.require(&CapabilityRequest::domain_read("org-1")).is_ok());

        let err = role
            .require(&CapabilityRequest::domain_write("org-1"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Forbidden {
                capability: Capability::DomainWrite,
                domain: DomainId::from("org-1"),
            }
        );
        assert_eq!(err.to_string(), "forbidden: domain_write on domain 'org-1'");
    }

    #[test]
    fn test_trait_objects_delegate() {
        let boxed: Box<dyn Role> = Box::new(ReadAll);
        assert!(boxed.domain_read("anything"));
        assert!(!boxed.domain_write("anything"));

        let by_ref: &dyn Role = &ReadAll;
        assert!(by_ref.check(&CapabilityRequest::domain_read("")));
    }
}
