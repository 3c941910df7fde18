use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a response was produced by the resolver chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseType {
    /// Answered by an upstream resolver
    Resolved,
    /// Served from the response cache
    Cached,
    /// Blocked by a deny list
    Blocked,
    /// Forwarded by a conditional upstream rule
    Conditional,
    /// Answered from custom DNS mappings
    #[serde(rename = "CUSTOMDNS")]
    CustomDns,
    /// Answered from a hosts file
    #[serde(rename = "HOSTSFILE")]
    HostsFile,
    /// Dropped by a query type filter
    Filtered,
    /// Rejected because the query name was not fully qualified
    #[serde(rename = "NOTFQDN")]
    NotFqdn,
    /// Special-use domain answered locally
    Special,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Resolved => "RESOLVED",
            ResponseType::Cached => "CACHED",
            ResponseType::Blocked => "BLOCKED",
            ResponseType::Conditional => "CONDITIONAL",
            ResponseType::CustomDns => "CUSTOMDNS",
            ResponseType::HostsFile => "HOSTSFILE",
            ResponseType::Filtered => "FILTERED",
            ResponseType::NotFqdn => "NOTFQDN",
            ResponseType::Special => "SPECIAL",
        }
    }

    pub fn all() -> &'static [ResponseType] {
        &[
            ResponseType::Resolved,
            ResponseType::Cached,
            ResponseType::Blocked,
            ResponseType::Conditional,
            ResponseType::CustomDns,
            ResponseType::HostsFile,
            ResponseType::Filtered,
            ResponseType::NotFqdn,
            ResponseType::Special,
        ]
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESOLVED" => Ok(ResponseType::Resolved),
            "CACHED" => Ok(ResponseType::Cached),
            "BLOCKED" => Ok(ResponseType::Blocked),
            "CONDITIONAL" => Ok(ResponseType::Conditional),
            "CUSTOMDNS" => Ok(ResponseType::CustomDns),
            "HOSTSFILE" => Ok(ResponseType::HostsFile),
            "FILTERED" => Ok(ResponseType::Filtered),
            "NOTFQDN" => Ok(ResponseType::NotFqdn),
            "SPECIAL" => Ok(ResponseType::Special),
            _ => Err(DomainError::InvalidResponseType(s.to_string())),
        }
    }
}
