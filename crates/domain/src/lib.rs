//! Ferrous DNS Domain Layer
pub mod config;
pub mod dns_response;
pub mod errors;

pub use config::LoggingConfig;
pub use dns_response::{DnsResponse, ResponseType};
pub use errors::DomainError;
