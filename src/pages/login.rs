//! Login page for professors and administrators.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api::ApiError;
use crate::routing::{self, paths};
use crate::state::session::{self, LoginError, Session};

fn login_error_message(err: &LoginError) -> &'static str {
    match err {
        // Rejected credentials and other backend refusals read the same
        // to the user; transport problems get a retry hint instead.
        LoginError::Api(ApiError::Unauthorized | ApiError::Status(_))
        | LoginError::InvalidToken => "Credenciais inválidas. Por favor, tente novamente.",
        LoginError::Api(_) => "Não foi possível conectar ao servidor. Tente novamente.",
    }
}

/// Login form. Disables resubmission while a call is in flight, surfaces
/// rejected credentials inline, and navigates to the preserved origin (or
/// the role home) on success.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<&'static str>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let login_value = login.get_untracked();
        let password_value = password.get_untracked();
        if login_value.trim().is_empty() {
            error.set(Some("Login é obrigatório"));
            return;
        }
        if password_value.is_empty() {
            error.set(Some("Senha é obrigatória"));
            return;
        }

        error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        let return_target =
            routing::sanitize_return_target(query.with_untracked(|q| q.get("from")));
        leptos::task::spawn_local(async move {
            match session::login(session, login_value.trim(), &password_value).await {
                Ok(identity) => {
                    let destination = return_target
                        .unwrap_or_else(|| routing::home_for(identity.role).to_owned());
                    navigate(&destination, Default::default());
                }
                Err(err) => error.set(Some(login_error_message(&err))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-page__card">
                <header class="card__header">
                    <h1 class="card__title">"Atlas"</h1>
                    <p class="card__description">
                        "Entre com suas credenciais para acessar o sistema"
                    </p>
                </header>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Login"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Digite seu login"
                            prop:value=move || login.get()
                            on:input=move |ev| login.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <label class="form__label">
                        "Senha"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Digite sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <footer class="card__footer">
                    <p>
                        "Não possui uma conta? "
                        <a class="link" href=paths::REGISTER_PROFESSOR>
                            "Cadastre-se como professor"
                        </a>
                    </p>
                </footer>
            </div>
        </div>
    }
}
