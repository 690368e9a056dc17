//! Split Horizon Domain Layer
pub mod address;
pub mod config;
pub mod dns_answer;
pub mod errors;
pub mod module_event;
pub mod network_pair;
pub mod rewrite;
pub mod view_table;

pub use address::AddressKey;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_answer::{
    AnswerRrSet, RecordType, ResponseCode, RrEntry, SecurityStatus, SyntheticResponse,
};
pub use errors::DomainError;
pub use module_event::{ExtState, ModuleEvent, ModuleId, ModuleState};
pub use network_pair::NetworkPair;
pub use rewrite::RewriteOutcome;
pub use view_table::{ViewTable, ViewTableBuilder};
