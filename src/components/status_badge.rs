use leptos::prelude::*;

use crate::net::types::ProjectStatus;

/// Colored badge for a project's lifecycle state.
#[component]
pub fn StatusBadge(status: ProjectStatus) -> impl IntoView {
    view! {
        <span class=format!("status-badge {}", status.badge_class())>{status.label()}</span>
    }
}
