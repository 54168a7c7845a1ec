//! Syntax check for network device path URIs
//!
//! Only the shape AMT firmware relies on is checked: a scheme, `://`, and an
//! authority with a non-empty host. Paths, queries and fragments are opaque.

/// `value` may carry one trailing NUL terminator.
pub(crate) fn is_valid_uri(value: &[u8]) -> bool {
    let value = value.strip_suffix(&[0]).unwrap_or(value);
    let Ok(text) = core::str::from_utf8(value) else {
        return false;
    };
    if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    let Some((scheme, rest)) = text.split_once("://") else {
        return false;
    };
    if !is_scheme(scheme) {
        return false;
    }
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    host(authority).is_some_and(|host| !host.is_empty())
}

// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn host(authority: &str) -> Option<&str> {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port);

    if let Some(literal) = host_port.strip_prefix('[') {
        let (host, after) = literal.split_once(']')?;
        return match after {
            "" => Some(host),
            port => port.strip_prefix(':').filter(|p| is_port(p)).map(|_| host),
        };
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) => is_port(port).then_some(host),
        None => Some(host_port),
    }
}

fn is_port(port: &str) -> bool {
    port.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_uris() {
        for uri in [
            "https://example.com/boot",
            "http://10.0.0.5:8080/images/boot.efi",
            "https://user@boot.example.org/",
            "https://[fe80::1]:443/efi",
            "https://example.com",
            "tftp+x://host?x=1",
        ] {
            assert!(is_valid_uri(uri.as_bytes()), "{uri}");
        }
    }

    #[test]
    fn tolerates_one_nul_terminator() {
        assert!(is_valid_uri(b"https://example.com/boot\0"));
        assert!(!is_valid_uri(b"https://example.com/boot\0\0"));
    }

    #[test]
    fn rejects_malformed_uris() {
        for uri in [
            "",
            "example.com/boot",
            "https:/example.com",
            "https://",
            "https:///path",
            "1https://example.com",
            "ht tp://example.com",
            "https://exa mple.com",
            "https://example.com:80a/",
            "https://[fe80::1/boot",
            "https://user@/boot",
        ] {
            assert!(!is_valid_uri(uri.as_bytes()), "{uri}");
        }
    }

    #[test]
    fn rejects_non_utf8() {
        assert!(!is_valid_uri(&[b'h', b't', 0xFF, 0xFE]));
    }
}
