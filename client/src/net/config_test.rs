use super::*;

#[test]
fn new_trims_trailing_slashes_from_url() {
    let cfg = IdentityConfig::new("https://id.example.com//", "anon").unwrap();
    assert_eq!(cfg.url, "https://id.example.com");
    assert_eq!(cfg.anon_key, "anon");
    assert!(cfg.is_configured());
}

#[test]
fn new_rejects_blank_values() {
    assert_eq!(IdentityConfig::new("", "anon"), None);
    assert_eq!(IdentityConfig::new("https://id.example.com", "   "), None);
    assert_eq!(IdentityConfig::new("/", "anon"), None);
}

#[test]
fn default_config_is_not_configured() {
    assert!(!IdentityConfig::default().is_configured());
}

#[test]
fn from_document_is_none_outside_browser() {
    assert_eq!(IdentityConfig::from_document(), None);
}

#[test]
fn meta_selector_quotes_name() {
    assert_eq!(meta_selector(META_IDENTITY_URL), "meta[name=\"slaczz-identity-url\"]");
}
