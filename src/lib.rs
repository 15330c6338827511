//! # resolv-config
//!
//! Read the system DNS resolver configuration and compute the names a stub
//! resolver should query.
//!
//! On POSIX systems the configuration comes from `/etc/resolv.conf` (see
//! resolv.conf(5)); on Windows it is collected from the DNS servers of each
//! network adapter. Either way the result is a [`DnsConfig`], which is always
//! usable: an unreadable source yields loopback nameservers and carries the
//! failure in [`DnsConfig::err`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! let config = resolv_config::read_config();
//!
//! for server in &config.servers {
//!     println!("nameserver {server}");
//! }
//!
//! // Names to try, in order, for a relative lookup of "www".
//! if let Some(names) = config.name_list("www") {
//!     for name in names {
//!         println!("query {name}");
//!     }
//! }
//! ```
//!
//! ## Testing against fixtures
//!
//! ```rust,no_run
//! use resolv_config::{ConfigSource, ResolvConfReader};
//! use std::io;
//!
//! let config = ResolvConfReader::new()
//!     .with_path("testdata/resolv.conf")
//!     .with_hostname(|| -> io::Result<String> { Ok("host.domain.local".into()) })
//!     .read_config();
//! ```
//!
//! ## Scope
//!
//! This crate only computes configuration and candidate names. It does not
//! send queries, cache the configuration, or watch the source for changes;
//! compare [`DnsConfig::mtime`] yourself to detect staleness.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod hostname;
pub mod name_list;
pub mod parse;
pub mod resolv_conf;
pub mod util;

pub use adapters::{Adapter, AdapterProvider, AdapterTable};
pub use config::{ConfigSource, DEFAULT_NAMESERVERS, DnsConfig};
pub use error::{ConfigError, Result};
pub use hostname::{HostnameProvider, SystemHostname, default_search};
pub use name_list::{MAX_NAME_LEN, avoid_dns, name_list};
pub use resolv_conf::{DEFAULT_RESOLV_CONF, ResolvConfReader};

#[cfg(windows)]
pub use adapters::SystemAdapters;

use std::path::Path;

/// Reads the configuration from the platform's default source.
///
/// `/etc/resolv.conf` on POSIX systems, the adapter table on Windows.
#[must_use]
pub fn read_config() -> DnsConfig {
    #[cfg(windows)]
    {
        AdapterTable::new(SystemAdapters).read_config()
    }
    #[cfg(not(windows))]
    {
        ResolvConfReader::new().read_config()
    }
}

/// Reads a resolv.conf-style file at `path`, on any platform.
#[must_use]
pub fn read_config_from(path: impl AsRef<Path>) -> DnsConfig {
    ResolvConfReader::new()
        .with_path(path.as_ref())
        .read_config()
}
