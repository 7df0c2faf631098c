use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_trimmed_number() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// parse_identity
// =============================================================================

#[test]
fn parse_identity_requires_both_values() {
    assert_eq!(parse_identity(None, Some("anon")), None);
    assert_eq!(parse_identity(Some("https://id.example.com"), None), None);
    assert_eq!(parse_identity(Some(""), Some("anon")), None);
}

#[test]
fn parse_identity_normalizes_url() {
    let cfg = parse_identity(Some("https://id.example.com/"), Some(" anon ")).unwrap();
    assert_eq!(cfg.url, "https://id.example.com");
    assert_eq!(cfg.anon_key, "anon");
}
