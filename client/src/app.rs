//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::api::HttpIdentityClient;
use crate::net::config::{IdentityConfig, META_IDENTITY_ANON_KEY, META_IDENTITY_URL};
use crate::pages::auth::AuthPage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Identity-provider settings travel to the browser as `<meta>` tags.
pub fn shell(options: LeptosOptions, identity: Option<IdentityConfig>) -> impl IntoView {
    let identity = identity.unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_IDENTITY_URL content=identity.url/>
                <meta name=META_IDENTITY_ANON_KEY content=identity.anon_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = HttpIdentityClient::new(IdentityConfig::from_document().unwrap_or_default());

    view! {
        <Stylesheet id="leptos" href="/pkg/slaczz.css"/>
        <Title text="Sign in | Slaczz"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=move || view! { <AuthPage identity=identity.clone()/> }/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/auth"/> }/>
            </Routes>
        </Router>
    }
}
