pub mod udp;

pub use udp::{validate_response_id, UdpTransport};
