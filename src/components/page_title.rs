use leptos::prelude::*;

/// Page header with a title and a short description line.
#[component]
pub fn PageTitle(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <header class="page-title">
            <h2 class="page-title__heading">{title}</h2>
            <p class="page-title__description">{description}</p>
        </header>
    }
}
