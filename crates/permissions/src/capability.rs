use crate::{DomainId, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capabilities a role can grant over a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    DomainRead,
    DomainWrite,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::DomainRead => "domain_read",
            Capability::DomainWrite => "domain_write",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domain_read" | "read" => Ok(Capability::DomainRead),
            "domain_write" | "write" => Ok(Capability::DomainWrite),
            other => Err(Error::UnknownCapability(other.to_string())),
        }
    }
}

/// A capability request against one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRequest {
    pub capability: Capability,
    pub domain: DomainId,
}

impl CapabilityRequest {
    pub fn new(capability: Capability, domain: impl Into<DomainId>) -> Self {
        Self {
            capability,
            domain: domain.into(),
        }
    }

    pub fn domain_read(domain: impl Into<DomainId>) -> Self {
        Self::new(Capability::DomainRead, domain)
    }

    pub fn domain_write(domain: impl Into<DomainId>) -> Self {
        Self::new(Capability::DomainWrite, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("domain_read".parse::<Capability>().unwrap(), Capability::DomainRead);
        assert_eq!("read".parse::<Capability>().unwrap(), Capability::DomainRead);
        assert_eq!("domain_write".parse::<Capability>().unwrap(), Capability::DomainWrite);
        assert_eq!("write".parse::<Capability>().unwrap(), Capability::DomainWrite);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Read".parse::<Capability>().unwrap_err();
        assert_eq!(err, Error::UnknownCapability("Read".to_string()));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Capability::DomainWrite).unwrap();
        assert_eq!(json, r#""domain_write""#);
        assert_eq!(Capability::DomainRead.to_string(), "domain_read");
    }
}
