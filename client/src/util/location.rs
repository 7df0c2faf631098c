//! Browser location helpers.
//!
//! TRADE-OFFS
//! ==========
//! Location access is browser-only; SSR paths return `None` so server
//! rendering never depends on a request origin.

/// Origin of the current page, e.g. `https://app.example.com`.
pub fn current_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Navigate the whole page to `url`.
///
/// # Errors
///
/// Returns an error string if the browser rejects the navigation or no
/// window is available.
pub fn assign(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window available".to_owned())?;
        window
            .location()
            .assign(url)
            .map_err(|e| format!("navigation failed: {e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("navigation is not available on server".to_owned())
    }
}
