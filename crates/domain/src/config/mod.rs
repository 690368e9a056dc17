pub mod discovery;
pub mod errors;
pub mod interfaces;
pub mod logging;
pub mod root;

pub use discovery::DiscoveryConfig;
pub use errors::ConfigError;
pub use interfaces::InterfaceSection;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_REDIRECT_TEMPLATE};
