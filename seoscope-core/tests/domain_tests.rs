// Tests for domain normalization

use seoscope_core::domain::normalize_domain;

// ============================================================================
// Canonical forms
// ============================================================================

#[test]
fn test_normalize_bare_domain() {
    assert_eq!(normalize_domain("example.com"), "example.com");
}

#[test]
fn test_normalize_strips_www() {
    assert_eq!(normalize_domain("www.example.com"), "example.com");
}

#[test]
fn test_normalize_strips_scheme_www_and_path() {
    assert_eq!(normalize_domain("https://www.example.com/path"), "example.com");
}

#[test]
fn test_normalize_http_scheme() {
    assert_eq!(normalize_domain("http://example.com/a?b=c#d"), "example.com");
}

#[test]
fn test_normalize_preserves_case() {
    assert_eq!(normalize_domain("http://Sub.Example.com"), "Sub.Example.com");
}

#[test]
fn test_normalize_keeps_subdomains() {
    assert_eq!(normalize_domain("https://blog.example.co.uk/"), "blog.example.co.uk");
}

#[test]
fn test_normalize_strips_port() {
    assert_eq!(normalize_domain("example.com:8080"), "example.com");
}

// ============================================================================
// www. handling
// ============================================================================

#[test]
fn test_normalize_strips_www_only_once() {
    assert_eq!(normalize_domain("www.www.example.com"), "www.example.com");
}

#[test]
fn test_normalize_www_is_case_sensitive() {
    assert_eq!(normalize_domain("WWW.example.com"), "WWW.example.com");
}

#[test]
fn test_normalize_www_must_be_a_prefix() {
    assert_eq!(normalize_domain("mywww.example.com"), "mywww.example.com");
}

// ============================================================================
// Scheme handling
// ============================================================================

#[test]
fn test_missing_scheme_equals_https_prefixed() {
    let inputs = [
        "example.com",
        "www.example.com/path",
        "Sub.Example.com",
        "user@host.org:99/x",
        "",
        "   ",
        "not a domain",
        "ftp://files.example.com",
    ];
    for input in inputs {
        assert_eq!(
            normalize_domain(input),
            normalize_domain(&format!("https://{}", input)),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_scheme_prefix_is_case_sensitive() {
    // "HTTPS://" is not recognised, so it becomes part of the authority
    assert_eq!(normalize_domain("HTTPS://example.com"), "HTTPS");
}

#[test]
fn test_other_schemes_are_not_stripped() {
    assert_eq!(normalize_domain("ftp://files.example.com"), "ftp");
}

// ============================================================================
// Malformed input passes through
// ============================================================================

#[test]
fn test_empty_input_yields_empty_host() {
    assert_eq!(normalize_domain(""), "");
}

#[test]
fn test_scheme_only_yields_empty_host() {
    assert_eq!(normalize_domain("https://"), "");
}

#[test]
fn test_path_only_yields_empty_host() {
    assert_eq!(normalize_domain("/just/a/path"), "");
}

#[test]
fn test_garbage_is_passed_through() {
    assert_eq!(normalize_domain("not a domain"), "not a domain");
}
