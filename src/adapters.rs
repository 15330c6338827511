//! Windows adapter-table source.
//!
//! Windows keeps DNS servers per network adapter instead of in a file. The
//! collection logic here is platform-neutral and works over any
//! [`AdapterProvider`]; the `ipconfig`-backed [`SystemAdapters`] provider is
//! only compiled on Windows.

use crate::config::{ConfigSource, DnsConfig};
use crate::error::Result;
use crate::util::join_host_port;
use std::net::IpAddr;

/// One network adapter as seen by the configuration reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// Operational status is "up".
    pub up: bool,
    /// DNS servers configured on the adapter, in adapter order.
    pub dns_servers: Vec<IpAddr>,
}

impl Adapter {
    /// Creates an adapter description.
    #[must_use]
    pub fn new(up: bool, dns_servers: impl Into<Vec<IpAddr>>) -> Self {
        Self {
            up,
            dns_servers: dns_servers.into(),
        }
    }
}

/// Enumerates network adapters.
pub trait AdapterProvider {
    /// Returns every adapter on the host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Adapters`](crate::ConfigError::Adapters) if
    /// the adapter table cannot be read.
    fn adapters(&self) -> Result<Vec<Adapter>>;
}

impl<F> AdapterProvider for F
where
    F: Fn() -> Result<Vec<Adapter>>,
{
    fn adapters(&self) -> Result<Vec<Adapter>> {
        self()
    }
}

/// Builds a [`DnsConfig`] from the DNS servers of every adapter that is up.
///
/// Site-local IPv6 servers (`fec0::/10`, matched on the first two octets)
/// are skipped: Windows fills them in as placeholders on idle interfaces.
/// The search list stays empty and [`DnsConfig::mtime`] is `None`.
#[derive(Debug, Clone, Default)]
pub struct AdapterTable<P> {
    provider: P,
}

impl<P: AdapterProvider> AdapterTable<P> {
    /// Creates a source over `provider`.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: AdapterProvider> ConfigSource for AdapterTable<P> {
    fn read_config(&self) -> DnsConfig {
        let mut config = DnsConfig::default();
        match self.provider.adapters() {
            Ok(adapters) => config.servers = collect_servers(&adapters),
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default DNS servers");
                config.err = Some(e);
            }
        }
        if config.servers.is_empty() {
            config.servers = DnsConfig::default_nameservers();
        }
        config
    }
}

fn collect_servers(adapters: &[Adapter]) -> Vec<String> {
    adapters
        .iter()
        .filter(|a| a.up)
        .flat_map(|a| &a.dns_servers)
        .filter(|ip| !is_windows_placeholder(ip))
        .map(|ip| join_host_port(&ip.to_string(), 53))
        .collect()
}

fn is_windows_placeholder(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V6(v6) => matches!(v6.octets(), [0xfe, 0xc0, ..]),
        IpAddr::V4(_) => false,
    }
}

/// Reads adapters through the Windows IP Helper API.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAdapters;

#[cfg(windows)]
impl AdapterProvider for SystemAdapters {
    fn adapters(&self) -> Result<Vec<Adapter>> {
        let adapters = ipconfig::get_adapters()
            .map_err(|e| crate::error::ConfigError::Adapters(e.to_string()))?;
        Ok(adapters
            .iter()
            .map(|a| {
                Adapter::new(
                    matches!(a.oper_status(), ipconfig::OperStatus::IfOperStatusUp),
                    a.dns_servers().to_vec(),
                )
            })
            .collect())
    }
}
