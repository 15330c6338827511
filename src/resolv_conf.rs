//! resolv.conf-style file source.

use crate::config::{ConfigSource, DnsConfig};
use crate::error::ConfigError;
use crate::hostname::{HostnameProvider, SystemHostname, default_search};
use crate::parse::apply_line;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default POSIX resolver configuration file.
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Reads a resolv.conf(5) file into a [`DnsConfig`].
///
/// # Degradation
///
/// A file that cannot be opened or stat'ed still produces a usable record:
/// the loopback [default nameservers](crate::DEFAULT_NAMESERVERS), a search
/// list derived from the hostname, and the failure in
/// [`DnsConfig::err`].
///
/// # Example
///
/// ```rust,no_run
/// use resolv_config::{ConfigSource, ResolvConfReader};
///
/// let config = ResolvConfReader::new().with_path("/run/systemd/resolve/resolv.conf").read_config();
/// if let Some(err) = &config.err {
///     eprintln!("using defaults: {err}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ResolvConfReader<H = SystemHostname> {
    path: PathBuf,
    hostname: H,
}

impl ResolvConfReader {
    /// Creates a reader for [`DEFAULT_RESOLV_CONF`] using the system hostname.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RESOLV_CONF),
            hostname: SystemHostname,
        }
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostnameProvider> ResolvConfReader<H> {
    /// Targets a different file (useful for testing).
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Replaces the hostname provider used to derive the default search list.
    #[must_use]
    pub fn with_hostname<P: HostnameProvider>(self, hostname: P) -> ResolvConfReader<P> {
        ResolvConfReader {
            path: self.path,
            hostname,
        }
    }

    /// Returns the file this reader targets.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses configuration text from `reader`, then fills in defaults.
    ///
    /// Reading stops at the first I/O error; what was read so far is kept.
    pub fn parse(&self, reader: impl BufRead) -> DnsConfig {
        let mut config = DnsConfig::default();
        read_lines(reader, &mut config);
        self.finish(&mut config);
        config
    }

    fn finish(&self, config: &mut DnsConfig) {
        if config.servers.is_empty() {
            config.servers = DnsConfig::default_nameservers();
        }
        if config.search.is_empty() {
            config.search = default_search(&self.hostname);
        }
    }

    fn degraded(&self, err: ConfigError) -> DnsConfig {
        tracing::debug!(error = %err, "Falling back to default DNS configuration");
        let mut config = DnsConfig {
            err: Some(err),
            ..DnsConfig::default()
        };
        self.finish(&mut config);
        config
    }
}

impl<H: HostnameProvider> ConfigSource for ResolvConfReader<H> {
    fn read_config(&self) -> DnsConfig {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => return self.degraded(ConfigError::open(&self.path, e)),
        };
        let mtime = match file.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => return self.degraded(ConfigError::stat(&self.path, e)),
        };

        let mut config = self.parse(BufReader::new(file));
        config.mtime = Some(mtime);

        tracing::debug!(
            path = %self.path.display(),
            servers = ?config.servers,
            search = ?config.search,
            ndots = config.ndots,
            unknown_opt = config.unknown_opt,
            "Read DNS configuration"
        );
        config
    }
}

fn read_lines(mut reader: impl BufRead, config: &mut DnsConfig) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => apply_line(&String::from_utf8_lossy(&buf), config),
            Err(e) => {
                tracing::warn!(error = %e, "Stopped reading DNS configuration early");
                break;
            }
        }
    }
}
