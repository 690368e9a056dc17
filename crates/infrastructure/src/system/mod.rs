pub mod ifconfig;

pub use ifconfig::IfconfigAddressSource;
