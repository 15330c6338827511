//! Search-list expansion of query names.

use crate::config::DnsConfig;

/// Longest name, in octets and including the trailing dot, that can be
/// queried.
pub const MAX_NAME_LEN: usize = 254;

/// Reports whether `name` must not be resolved through DNS.
///
/// Currently this covers empty names and the `.onion` special-use domain
/// (RFC 7686), compared case-insensitively. `.local` (RFC 6762) is not
/// covered.
#[must_use]
pub fn avoid_dns(name: &str) -> bool {
    if name.is_empty() {
        return true;
    }
    let name = name.strip_suffix('.').unwrap_or(name);
    has_suffix_fold(name, ".onion")
}

fn has_suffix_fold(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.as_bytes()[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

/// Returns the names to query, in order, for `name` under `config`.
///
/// Returns `None` when `name` is too long to be a domain name, or is rooted
/// and excluded by [`avoid_dns`]. Otherwise the list may still be empty if
/// every candidate was filtered out.
///
/// A relative name with at least [`ndots`](DnsConfig::ndots) dots is tried
/// unsuffixed first; one with fewer is tried with every search suffix first
/// and unsuffixed last.
///
/// ```
/// use resolv_config::{DnsConfig, name_list};
///
/// let config = DnsConfig {
///     search: vec!["example.com.".into()],
///     ndots: 2,
///     ..DnsConfig::default()
/// };
/// assert_eq!(
///     name_list("host", &config),
///     Some(vec!["host.example.com.".to_string(), "host.".to_string()])
/// );
/// ```
#[must_use]
pub fn name_list(name: &str, config: &DnsConfig) -> Option<Vec<String>> {
    let rooted = name.ends_with('.');
    if name.len() > MAX_NAME_LEN || (name.len() == MAX_NAME_LEN && !rooted) {
        return None;
    }

    if rooted {
        return (!avoid_dns(name)).then(|| vec![name.to_string()]);
    }

    let has_ndots = name.matches('.').count() >= config.ndots;
    let name = format!("{name}.");
    let try_bare = !avoid_dns(&name);

    let mut names = Vec::with_capacity(1 + config.search.len());
    if has_ndots && try_bare {
        names.push(name.clone());
    }
    for suffix in &config.search {
        let fqdn = format!("{name}{suffix}");
        if !avoid_dns(&fqdn) && fqdn.len() <= MAX_NAME_LEN {
            names.push(fqdn);
        }
    }
    if !has_ndots && try_bare {
        names.push(name);
    }
    Some(names)
}

impl DnsConfig {
    /// Returns the names to query for `name`. See [`name_list`].
    #[must_use]
    pub fn name_list(&self, name: &str) -> Option<Vec<String>> {
        name_list(name, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(search: &[&str], ndots: usize) -> DnsConfig {
        DnsConfig {
            search: search.iter().map(ToString::to_string).collect(),
            ndots,
            ..DnsConfig::default()
        }
    }

    #[test]
    fn onion_is_avoided() {
        assert!(avoid_dns(""));
        assert!(avoid_dns("foo.onion"));
        assert!(avoid_dns("foo.ONION."));
        assert!(avoid_dns("a.b.Onion"));
        assert!(!avoid_dns("onion"));
        assert!(!avoid_dns("onion."));
        assert!(!avoid_dns("example.com."));
        assert!(!avoid_dns("."));
    }

    #[test]
    fn few_dots_tries_suffixes_first() {
        let c = config(&["example.com."], 2);
        assert_eq!(
            c.name_list("host").unwrap(),
            vec!["host.example.com.", "host."]
        );
    }

    #[test]
    fn enough_dots_tries_bare_first() {
        let c = config(&["a.example.", "b.example."], 1);
        assert_eq!(
            c.name_list("www.corp").unwrap(),
            vec!["www.corp.", "www.corp.a.example.", "www.corp.b.example."]
        );
    }

    #[test]
    fn rooted_name_is_never_suffixed() {
        let c = config(&["example.com."], 5);
        assert_eq!(c.name_list("host.").unwrap(), vec!["host."]);
    }

    #[test]
    fn onion_names_are_rejected_or_filtered() {
        let c = config(&["example.com."], 1);
        assert_eq!(c.name_list("hidden.onion."), None);
        // The bare candidate is dropped, suffixed ones survive.
        assert_eq!(
            c.name_list("hidden.onion").unwrap(),
            vec!["hidden.onion.example.com."]
        );

        let c = config(&["onion."], 1);
        assert_eq!(c.name_list("host").unwrap(), vec!["host."]);
    }

    #[test]
    fn empty_search_list() {
        let c = config(&[], 1);
        assert_eq!(c.name_list("host").unwrap(), vec!["host."]);
        assert_eq!(c.name_list("a.b").unwrap(), vec!["a.b."]);
    }

    #[test]
    fn zero_ndots_always_tries_bare_first() {
        let c = config(&["example.com."], 0);
        assert_eq!(
            c.name_list("host").unwrap(),
            vec!["host.", "host.example.com."]
        );
    }

    #[test]
    fn length_limits() {
        let c = config(&["example.com."], 1);

        let rooted_max = format!("{}.", "a".repeat(253));
        assert_eq!(c.name_list(&rooted_max).unwrap(), vec![rooted_max.clone()]);

        assert_eq!(c.name_list(&"a".repeat(254)), None);
        assert_eq!(c.name_list(&format!("{}.", "a".repeat(254))), None);

        // Fits unsuffixed but not with the suffix.
        let relative = "a".repeat(253);
        assert_eq!(c.name_list(&relative).unwrap(), vec![format!("{relative}.")]);
    }

    #[test]
    fn candidates_never_exceed_max_length() {
        let c = config(&["x.", "much.longer.suffix.example."], 1);
        for len in 200..=253 {
            let name = "b".repeat(len);
            for fqdn in c.name_list(&name).unwrap() {
                assert!(fqdn.len() <= MAX_NAME_LEN, "{len}: {fqdn}");
            }
        }
    }

    #[test]
    fn empty_name_becomes_root() {
        let c = config(&[], 1);
        assert_eq!(c.name_list("").unwrap(), vec!["."]);
    }
}
