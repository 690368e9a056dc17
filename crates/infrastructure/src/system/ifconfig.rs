use async_trait::async_trait;
use split_horizon_application::ports::{InterfaceAddressSource, InterfaceAddresses};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Interface address discovery through `ifconfig <interface>`.
pub struct IfconfigAddressSource {
    program: String,
}

impl IfconfigAddressSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Extracts IPv4 address tokens from ifconfig output.
    ///
    /// Handles both `inet 10.0.0.1 netmask ...` and the older
    /// `inet addr:10.0.0.1  Bcast:...` layouts. `inet6` lines are ignored.
    pub fn parse_output(output: &str) -> InterfaceAddresses {
        output
            .lines()
            .filter_map(|line| {
                let mut fields = line.split_whitespace();
                if fields.next()? != "inet" {
                    return None;
                }
                let addr = fields.next()?;
                let addr = addr.strip_prefix("addr:").unwrap_or(addr);
                Some(addr.to_string())
            })
            .collect()
    }
}

impl Default for IfconfigAddressSource {
    fn default() -> Self {
        Self::new("/sbin/ifconfig")
    }
}

#[async_trait]
impl InterfaceAddressSource for IfconfigAddressSource {
    async fn addresses(&self, interface: &str) -> InterfaceAddresses {
        let output = match Command::new(&self.program)
            .arg(interface)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, program = %self.program, interface = %interface, "Failed to run ifconfig");
                return Vec::new();
            }
        };

        if !output.status.success() {
            debug!(status = %output.status, interface = %interface, "ifconfig reported an error");
            return Vec::new();
        }

        let addrs = Self::parse_output(&String::from_utf8_lossy(&output.stdout));
        debug!(interface = %interface, addresses = addrs.len(), "Interface addresses read");
        addrs
    }
}
