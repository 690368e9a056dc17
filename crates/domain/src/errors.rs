use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("WAN network {wan} and LAN network {lan} differ in prefix length")]
    PrefixLengthMismatch { wan: String, lan: String },

    #[error("Network {network} is wider than the /{min_prefix} limit")]
    NetworkTooLarge { network: String, min_prefix: u8 },

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Cannot create response: {0}")]
    SynthesisFailed(String),

    #[error("Bad event: {0}")]
    UnrecognizedEvent(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::ConfigError(err.to_string())
    }
}
