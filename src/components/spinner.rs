use leptos::prelude::*;

/// Neutral waiting indicator, centered in its container.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" aria-label="Carregando"></div>
        </div>
    }
}
