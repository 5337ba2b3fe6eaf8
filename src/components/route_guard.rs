#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::spinner::Spinner;
use crate::net::types::Role;
use crate::routing::{self, paths};
use crate::state::session::Session;

/// What the guard does for a given session and required role set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still loading: show a neutral indicator, no redirect.
    Wait,
    /// Not signed in: go to the login page, carrying the origin.
    RedirectToLogin,
    /// Signed in but outside the required set: go to the role's own home.
    RedirectTo(&'static str),
    /// Render the protected content.
    Allow,
}

/// Pure guard decision. An empty `allowed` set means any authenticated
/// user may pass.
pub fn evaluate(session: &Session, allowed: &[Role]) -> GuardOutcome {
    match session {
        Session::Initializing | Session::LoggingIn => GuardOutcome::Wait,
        Session::Unauthenticated => GuardOutcome::RedirectToLogin,
        Session::Authenticated(identity) => {
            if allowed.is_empty() || allowed.contains(&identity.role) {
                GuardOutcome::Allow
            } else {
                GuardOutcome::RedirectTo(routing::home_for(identity.role))
            }
        }
    }
}

/// Gate a screen behind a role set.
///
/// Re-rendering with unchanged inputs re-evaluates the same pure decision
/// and renders the same declarative `<Redirect>`; no navigation side
/// effects accumulate. Children are never rendered on the denial paths,
/// so protected content cannot flash before a redirect.
#[component]
pub fn RequireRole(
    #[prop(optional)] allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    view! {
        {move || match evaluate(&session.get(), allowed) {
            GuardOutcome::Wait => view! { <Spinner/> }.into_any(),
            GuardOutcome::RedirectToLogin => {
                let from = location.pathname.get();
                view! { <Redirect path=format!("{}?from={from}", paths::LOGIN)/> }.into_any()
            }
            GuardOutcome::RedirectTo(destination) => {
                view! { <Redirect path=destination/> }.into_any()
            }
            GuardOutcome::Allow => children().into_any(),
        }}
    }
}
