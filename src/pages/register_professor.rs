//! Public professor self-registration.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net;
use crate::routing::paths;

/// Validate the registration form, returning the first problem found.
fn validate(
    nome: &str,
    login: &str,
    escola: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if nome.trim().is_empty() {
        return Some("Nome é obrigatório");
    }
    if login.trim().is_empty() {
        return Some("Login é obrigatório");
    }
    if escola.trim().is_empty() {
        return Some("Escola é obrigatória");
    }
    if password.len() < 6 {
        return Some("Senha deve ter pelo menos 6 caracteres");
    }
    if password != confirm {
        return Some("As senhas não coincidem");
    }
    None
}

/// Registration form for new professors. On success, sends the user to
/// the login page to sign in with the new credentials.
#[component]
pub fn RegisterProfessorPage() -> impl IntoView {
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let login = RwSignal::new(String::new());
    let escola = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<&'static str>::None);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let nome_value = nome.get_untracked();
        let login_value = login.get_untracked();
        let escola_value = escola.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if let Some(problem) = validate(
            &nome_value,
            &login_value,
            &escola_value,
            &password_value,
            &confirm_value,
        ) {
            error.set(Some(problem));
            return;
        }

        error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = net::auth::register_professor(
                login_value.trim(),
                &password_value,
                Some(nome_value.trim()),
                Some(escola_value.trim()),
            )
            .await;
            match result {
                Ok(_) => navigate(paths::LOGIN, Default::default()),
                Err(err) => {
                    log::warn!("professor registration failed: {err}");
                    error.set(Some("Erro ao criar conta. Tente novamente."));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-page__card">
                <header class="card__header">
                    <h1 class="card__title">"Cadastro de Professor"</h1>
                    <p class="card__description">"Crie sua conta para solicitar projetos"</p>
                </header>

                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Nome"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Digite seu nome completo"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
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
                        "Escola"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Digite o nome da sua escola"
                            prop:value=move || escola.get()
                            on:input=move |ev| escola.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <label class="form__label">
                        "Senha"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Mínimo de 6 caracteres"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <label class="form__label">
                        "Confirmar Senha"
                        <input
                            class="form__input"
                            type="password"
                            placeholder="Repita a senha"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Cadastrando..." } else { "Cadastrar" }}
                    </button>
                </form>

                <footer class="card__footer">
                    <p>
                        "Já possui uma conta? "
                        <a class="link" href=paths::LOGIN>
                            "Entrar"
                        </a>
                    </p>
                </footer>
            </div>
        </div>
    }
}
