mod interface_address_source;
mod query_context;

pub use interface_address_source::{InterfaceAddressSource, InterfaceAddresses};
pub use query_context::QueryContext;
