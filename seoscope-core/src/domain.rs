// Domain normalization for lookup input

/// Reduce arbitrary URL-ish input to the host the upstream is queried with.
///
/// A missing `http://`/`https://` prefix is treated as `https://`. The host is
/// the authority without userinfo or port; case is preserved. One leading
/// `www.` is dropped. Never fails: garbage in yields a (possibly empty) string.
pub fn normalize_domain(raw: &str) -> String {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let host = extract_host(&with_scheme);
    host.strip_prefix("www.").unwrap_or(host).to_string()
}

/// Host component of an absolute `scheme://authority/...` string.
pub fn extract_host(url: &str) -> &str {
    let Some((_, rest)) = url.split_once("://") else {
        return "";
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    let host_port = match authority.rfind('@') {
        Some(at) => &authority[at + 1..],
        None => authority,
    };

    if host_port.starts_with('[') {
        // IPv6 literal keeps its brackets
        return match host_port.find(']') {
            Some(end) => &host_port[..=end],
            None => host_port,
        };
    }

    match host_port.split_once(':') {
        Some((host, _port)) => host,
        None => host_port,
    }
}
