//! Line-level resolv.conf grammar.
//!
//! See resolv.conf(5). Each line is split into whitespace-separated fields
//! and dispatched on its first field. Nothing here fails: malformed content
//! sets [`DnsConfig::unknown_opt`] and parsing carries on.

use crate::config::{DnsConfig, MAX_NAMESERVERS, MAX_NDOTS};
use crate::util::{ensure_rooted, is_ip_literal, join_host_port, leading_decimal};
use std::time::Duration;

/// Splits a line into whitespace-separated fields.
///
/// Blank lines and comments (first non-space character `;` or `#`) yield no
/// fields.
///
/// ```
/// use resolv_config::parse::fields;
///
/// assert_eq!(fields("nameserver\t8.8.8.8 "), vec!["nameserver", "8.8.8.8"]);
/// assert!(fields("  # nameserver 1.1.1.1").is_empty());
/// ```
#[must_use]
pub fn fields(line: &str) -> Vec<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with([';', '#']) {
        return Vec::new();
    }
    trimmed.split_ascii_whitespace().collect()
}

/// Applies one `options` token to `config`.
///
/// The first matching pattern wins; unrecognised tokens set
/// [`DnsConfig::unknown_opt`].
pub fn apply_option(token: &str, config: &mut DnsConfig) {
    if let Some(n) = token.strip_prefix("ndots:") {
        config.ndots = (leading_decimal(n) as usize).min(MAX_NDOTS);
    } else if let Some(n) = token.strip_prefix("timeout:") {
        config.timeout = Duration::from_secs(u64::from(leading_decimal(n).max(1)));
    } else if let Some(n) = token.strip_prefix("attempts:") {
        config.attempts = leading_decimal(n).max(1);
    } else {
        match token {
            "rotate" => config.rotate = true,
            // Linux: IPv4 and IPv6 lookups are performed sequentially.
            "single-request" | "single-request-reopen" => config.single_request = true,
            // Linux (use-vc), FreeBSD (usevc) and OpenBSD (tcp).
            "use-vc" | "usevc" | "tcp" => config.use_tcp = true,
            "trust-ad" => config.trust_ad = true,
            "no-reload" => config.no_reload = true,
            // EDNS is always on.
            "edns0" => {}
            _ => {
                tracing::trace!(option = %token, "Unknown resolv.conf option");
                config.unknown_opt = true;
            }
        }
    }
}

/// Applies one configuration line to `config`.
pub fn apply_line(line: &str, config: &mut DnsConfig) {
    let f = fields(line);
    let Some((&directive, args)) = f.split_first() else {
        return;
    };

    match (directive, args) {
        ("nameserver", [addr, ..]) => {
            // Names are dropped: resolving them would need DNS itself.
            if config.servers.len() < MAX_NAMESERVERS && is_ip_literal(addr) {
                config.servers.push(join_host_port(addr, 53));
            }
        }
        ("domain", [domain, ..]) => {
            config.search = vec![ensure_rooted(domain)];
        }
        ("search", [_, ..]) => {
            config.search = args
                .iter()
                .map(|s| ensure_rooted(s))
                .filter(|s| s != ".")
                .collect();
        }
        ("options", _) => {
            for token in args {
                apply_option(token, config);
            }
        }
        // OpenBSD: space-separated values from bind, file, yp.
        ("lookup", _) => {
            config.lookup = args.iter().map(ToString::to_string).collect();
        }
        _ => {
            tracing::trace!(line = %line.trim(), "Unknown or incomplete resolv.conf directive");
            config.unknown_opt = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> DnsConfig {
        let mut config = DnsConfig::default();
        for line in text.lines() {
            apply_line(line, &mut config);
        }
        config
    }

    #[test]
    fn comments_and_blanks_have_no_fields() {
        assert!(fields("").is_empty());
        assert!(fields("   \t ").is_empty());
        assert!(fields("; nameserver 1.1.1.1").is_empty());
        assert!(fields("\t#search x").is_empty());
        assert_eq!(fields("search a b\r"), vec!["search", "a", "b"]);
    }

    #[test]
    fn ndots_is_clamped() {
        for (token, want) in [
            ("ndots:5", 5),
            ("ndots:0", 0),
            ("ndots:16", 15),
            ("ndots:-1", 0),
            ("ndots:junk", 0),
            ("ndots:", 0),
        ] {
            let mut c = DnsConfig::default();
            apply_option(token, &mut c);
            assert_eq!(c.ndots, want, "{token}");
            assert!(!c.unknown_opt, "{token}");
        }
    }

    #[test]
    fn timeout_and_attempts_have_a_floor() {
        let mut c = DnsConfig::default();
        apply_option("timeout:0", &mut c);
        apply_option("attempts:0", &mut c);
        assert_eq!(c.timeout, Duration::from_secs(1));
        assert_eq!(c.attempts, 1);

        apply_option("timeout:10", &mut c);
        apply_option("attempts:3", &mut c);
        assert_eq!(c.timeout, Duration::from_secs(10));
        assert_eq!(c.attempts, 3);
    }

    #[test]
    fn boolean_options() {
        let c = parse("options rotate single-request-reopen usevc trust-ad no-reload edns0");
        assert!(c.rotate);
        assert!(c.single_request);
        assert!(c.use_tcp);
        assert!(c.trust_ad);
        assert!(c.no_reload);
        assert!(!c.unknown_opt);
    }

    #[test]
    fn unknown_option_does_not_stop_the_line() {
        let c = parse("options bogus ndots:3");
        assert!(c.unknown_opt);
        assert_eq!(c.ndots, 3);
    }

    #[test]
    fn nameservers_are_capped_and_must_be_literal() {
        let c = parse(
            "nameserver 1.1.1.1\n\
             nameserver ns.example.com\n\
             nameserver ::1\n\
             nameserver 8.8.8.8\n\
             nameserver 9.9.9.9\n",
        );
        assert_eq!(c.servers, vec!["1.1.1.1:53", "[::1]:53", "8.8.8.8:53"]);
        assert!(!c.unknown_opt);
    }

    #[test]
    fn last_search_or_domain_wins() {
        let c = parse("domain a.example\nsearch b.example c.example.\n");
        assert_eq!(c.search, vec!["b.example.", "c.example."]);

        let c = parse("search b.example c.example\ndomain a.example\n");
        assert_eq!(c.search, vec!["a.example."]);
    }

    #[test]
    fn search_skips_root() {
        let c = parse("search . x.example .\n");
        assert_eq!(c.search, vec!["x.example."]);
    }

    #[test]
    fn missing_arguments_are_unknown() {
        for line in ["nameserver", "domain", "search"] {
            let c = parse(line);
            assert!(c.unknown_opt, "{line}");
            assert!(c.servers.is_empty());
            assert!(c.search.is_empty());
        }
    }

    #[test]
    fn lookup_is_verbatim() {
        let c = parse("lookup file bind\n");
        assert_eq!(c.lookup, vec!["file", "bind"]);
        assert!(!c.unknown_opt);
    }

    #[test]
    fn unknown_directive() {
        let c = parse("sortlist 130.155.160.0/255.255.240.0\n");
        assert!(c.unknown_opt);
    }
}
