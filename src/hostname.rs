//! Local hostname lookup and the default search suffix derived from it.

use crate::util::ensure_rooted;
use std::io;

/// Supplies the local hostname.
///
/// Implemented for [`SystemHostname`] and for any
/// `Fn() -> io::Result<String>`, so tests can inject a fixed name.
pub trait HostnameProvider {
    /// Returns the local hostname.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the hostname cannot be determined.
    fn hostname(&self) -> io::Result<String>;
}

impl<F> HostnameProvider for F
where
    F: Fn() -> io::Result<String>,
{
    fn hostname(&self) -> io::Result<String> {
        self()
    }
}

/// Reads the hostname from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostname;

impl HostnameProvider for SystemHostname {
    #[cfg(unix)]
    fn hostname(&self) -> io::Result<String> {
        let mut buf = [0u8; 256];
        // SAFETY: `buf` is valid for writes of `buf.len()` bytes and
        // gethostname never writes past the length it is given.
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
        if rc != 0 {
            return Err(io::Error::last_os_error());
        }
        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        String::from_utf8(buf[..len].to_vec())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    #[cfg(not(unix))]
    fn hostname(&self) -> io::Result<String> {
        std::env::var("COMPUTERNAME").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))
    }
}

/// Derives the fallback search list from the local hostname.
///
/// Everything after the first interior `.` becomes the single rooted
/// suffix. A hostname without one (`host`, `host.`) or a failed lookup
/// yields an empty list, never `[""]`, which would repeat the unsuffixed
/// query.
///
/// ```
/// use resolv_config::default_search;
/// use std::io;
///
/// let search = default_search(&|| -> io::Result<String> { Ok("box.corp.example".into()) });
/// assert_eq!(search, vec!["corp.example."]);
/// ```
pub fn default_search<H: HostnameProvider + ?Sized>(provider: &H) -> Vec<String> {
    let hostname = match provider.hostname() {
        Ok(h) => h,
        Err(e) => {
            tracing::debug!(error = %e, "Hostname lookup failed, no default search domain");
            return Vec::new();
        }
    };

    match hostname.find('.') {
        Some(i) if i < hostname.len() - 1 => vec![ensure_rooted(&hostname[i + 1..])],
        _ => Vec::new(),
    }
}
