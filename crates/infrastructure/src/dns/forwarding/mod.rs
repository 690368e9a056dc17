pub mod message_builder;
pub mod record_sets;

pub use message_builder::MessageBuilder;
pub use record_sets::RecordSetCollector;
