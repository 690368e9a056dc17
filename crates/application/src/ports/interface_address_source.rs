use async_trait::async_trait;

/// Raw address strings as reported for one interface.
pub type InterfaceAddresses = Vec<String>;

#[async_trait]
pub trait InterfaceAddressSource: Send + Sync {
    /// Addresses currently bound to `interface`.
    ///
    /// A missing interface, or one without addresses, yields an empty list
    /// rather than an error.
    async fn addresses(&self, interface: &str) -> InterfaceAddresses;
}
