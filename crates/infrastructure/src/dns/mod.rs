pub mod forwarding;
pub mod query_context;
pub mod transport;

pub use forwarding::{MessageBuilder, RecordSetCollector};
pub use query_context::MessageQueryContext;
pub use transport::UdpTransport;
