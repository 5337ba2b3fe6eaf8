//! Root route: role-based redirection.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::spinner::Spinner;
use crate::routing;
use crate::state::session::Session;

/// Landing page for `/`. Shows a neutral indicator until the session
/// settles, then redirects through the pure navigation resolver — login
/// for visitors, the role's own dashboard for signed-in users.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        {move || match routing::resolve(&session.get()) {
            None => view! { <Spinner/> }.into_any(),
            Some(destination) => view! { <Redirect path=destination/> }.into_any(),
        }}
    }
}
