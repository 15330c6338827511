//! The parsed resolver configuration record.

use crate::error::ConfigError;
use std::time::{Duration, SystemTime};

/// Nameservers used when a source names none, or cannot be read at all.
pub const DEFAULT_NAMESERVERS: [&str; 2] = ["127.0.0.1:53", "[::1]:53"];

/// Most `nameserver` lines honoured from a resolv.conf file.
pub const MAX_NAMESERVERS: usize = 3;

/// Upper bound for [`DnsConfig::ndots`].
pub const MAX_NDOTS: usize = 15;

/// Default [`DnsConfig::ndots`].
pub const DEFAULT_NDOTS: usize = 1;

/// Default [`DnsConfig::timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default [`DnsConfig::attempts`].
pub const DEFAULT_ATTEMPTS: u32 = 2;

/// System DNS resolver configuration.
///
/// Built fresh by a [`ConfigSource`](crate::ConfigSource) on every read and
/// never mutated afterwards. Staleness checks against [`mtime`](Self::mtime)
/// are left to the caller.
///
/// # Example
///
/// ```
/// use resolv_config::DnsConfig;
///
/// let config = DnsConfig::default();
/// assert_eq!(config.ndots, 1);
/// assert_eq!(config.attempts, 2);
/// assert_eq!(config.timeout.as_secs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsConfig {
    /// Server addresses in `host:port` form, at most three from resolv.conf.
    pub servers: Vec<String>,

    /// Rooted suffixes appended to relative names, in precedence order.
    pub search: Vec<String>,

    /// Dots a name needs before it is tried unsuffixed first. In `0..=15`.
    pub ndots: usize,

    /// Wait before giving up on a query, including retries. At least 1s.
    pub timeout: Duration,

    /// Lost packets before giving up on a server. At least 1.
    pub attempts: u32,

    /// Round robin among servers.
    pub rotate: bool,

    /// Something unrecognised was encountered while parsing.
    pub unknown_opt: bool,

    /// Use sequential A and AAAA queries instead of parallel ones.
    pub single_request: bool,

    /// Force TCP for DNS queries.
    pub use_tcp: bool,

    /// Set the AD flag on queries.
    pub trust_ad: bool,

    /// Do not check the source for updates.
    pub no_reload: bool,

    /// OpenBSD `lookup` database order.
    pub lookup: Vec<String>,

    /// Advisory error from reading the source, if any.
    pub err: Option<ConfigError>,

    /// Modification time of the source, when known.
    pub mtime: Option<SystemTime>,
}

impl DnsConfig {
    /// Returns [`DEFAULT_NAMESERVERS`] as owned strings.
    #[must_use]
    pub fn default_nameservers() -> Vec<String> {
        DEFAULT_NAMESERVERS.iter().map(ToString::to_string).collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            search: Vec::new(),
            ndots: DEFAULT_NDOTS,
            timeout: DEFAULT_TIMEOUT,
            attempts: DEFAULT_ATTEMPTS,
            rotate: false,
            unknown_opt: false,
            single_request: false,
            use_tcp: false,
            trust_ad: false,
            no_reload: false,
            lookup: Vec::new(),
            err: None,
            mtime: None,
        }
    }
}

/// A place the system resolver configuration can be read from.
///
/// Implemented by [`ResolvConfReader`](crate::ResolvConfReader) for
/// resolv.conf-style files and by [`AdapterTable`](crate::AdapterTable) for
/// the Windows adapter table.
pub trait ConfigSource {
    /// Reads the configuration.
    ///
    /// Always returns a usable record. Source failures are reported through
    /// [`DnsConfig::err`].
    fn read_config(&self) -> DnsConfig;
}
