//! Split Horizon Infrastructure Layer
pub mod dns;
pub mod system;
