//! Identity-provider connection settings shared by server and browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server reads these from its environment and renders them into the SSR
//! shell as `<meta>` tags; the hydrated client reads them back from the
//! document so the WASM bundle carries no baked-in endpoint.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the identity-provider base URL.
pub const META_IDENTITY_URL: &str = "slaczz-identity-url";
/// `<meta name=...>` carrying the public (anon) API key.
pub const META_IDENTITY_ANON_KEY: &str = "slaczz-identity-anon-key";

/// Base URL and public key of the external identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityConfig {
    pub url: String,
    pub anon_key: String,
}

impl IdentityConfig {
    /// Build a config, dropping any trailing `/` from the base URL.
    ///
    /// Returns `None` when either value is blank.
    #[must_use]
    pub fn new(url: &str, anon_key: &str) -> Option<Self> {
        let url = url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self { url: url.to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Whether both the URL and key are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Read the config from the `<meta>` tags rendered by the server.
    ///
    /// Returns `None` on the server or when the tags are missing.
    pub fn from_document() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let url = read_meta(META_IDENTITY_URL)?;
            let anon_key = read_meta(META_IDENTITY_ANON_KEY)?;
            Self::new(&url, &anon_key)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&meta_selector(name)).ok()??;
    el.get_attribute("content")
}
