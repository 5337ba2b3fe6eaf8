//! Catch-all route.

use leptos::prelude::*;

use crate::routing::paths;

/// 404 page with an escape hatch back to the root redirect.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Página não encontrada."</p>
            <a class="not-found__link" href=paths::ROOT>
                "Voltar ao início"
            </a>
        </div>
    }
}
