//! Internal utilities.

use std::net::{IpAddr, Ipv6Addr};

/// Ceiling for [`leading_decimal`]; longer digit runs saturate here.
const DECIMAL_CEILING: u32 = 0xFF_FFFF;

/// Appends a trailing `.` unless `name` already ends with one.
#[must_use]
pub fn ensure_rooted(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Parses the leading run of ASCII digits in `s`.
///
/// Returns 0 when `s` does not start with a digit and saturates at
/// `0xFFFFFF` on overflow. Trailing garbage is ignored.
#[must_use]
pub fn leading_decimal(s: &str) -> u32 {
    let mut n: u32 = 0;
    for b in s.bytes().take_while(u8::is_ascii_digit) {
        n = n * 10 + u32::from(b - b'0');
        if n >= DECIMAL_CEILING {
            return DECIMAL_CEILING;
        }
    }
    n
}

/// Returns `true` if `s` is a literal IP address.
///
/// IPv6 literals may carry a zone (`fe80::1%eth0`); IPv4 literals may not.
#[must_use]
pub fn is_ip_literal(s: &str) -> bool {
    match s.split_once('%') {
        Some((addr, zone)) => !zone.is_empty() && addr.parse::<Ipv6Addr>().is_ok(),
        None => s.parse::<IpAddr>().is_ok(),
    }
}

/// Joins a host and port, bracketing hosts that contain a colon.
#[must_use]
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooting_is_idempotent() {
        assert_eq!(ensure_rooted("example.com"), "example.com.");
        assert_eq!(ensure_rooted("example.com."), "example.com.");
        assert_eq!(ensure_rooted(""), ".");
    }

    #[test]
    fn leading_decimal_prefix() {
        assert_eq!(leading_decimal("5"), 5);
        assert_eq!(leading_decimal("12abc"), 12);
        assert_eq!(leading_decimal("-1"), 0);
        assert_eq!(leading_decimal(""), 0);
        assert_eq!(leading_decimal("99999999999"), DECIMAL_CEILING);
    }

    #[test]
    fn ip_literals() {
        assert!(is_ip_literal("8.8.8.8"));
        assert!(is_ip_literal("2001:4860:4860::8888"));
        assert!(is_ip_literal("fe80::1%lo0"));
        assert!(!is_ip_literal("fe80::1%"));
        assert!(!is_ip_literal("10.0.0.1%eth0"));
        assert!(!is_ip_literal("ns1.example.com"));
    }

    #[test]
    fn host_port_joining() {
        assert_eq!(join_host_port("8.8.8.8", 53), "8.8.8.8:53");
        assert_eq!(join_host_port("::1", 53), "[::1]:53");
        assert_eq!(join_host_port("fe80::1%lo0", 53), "[fe80::1%lo0]:53");
    }
}
