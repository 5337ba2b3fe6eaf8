//! Admin-side professor registration.

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::page_title::PageTitle;
use crate::net;

fn validate(login: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if login.trim().is_empty() {
        return Some("Login é obrigatório");
    }
    if !login.contains('@') {
        return Some("Formato de email inválido");
    }
    if password.len() < 6 {
        return Some("Senha deve ter pelo menos 6 caracteres");
    }
    if password != confirm {
        return Some("As senhas não coincidem");
    }
    None
}

/// Registers a professor account on their behalf. Stays on the page and
/// resets the form so several accounts can be created in sequence.
#[component]
pub fn AdminRegisterProfessorPage() -> impl IntoView {
    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<&'static str>::None);
    let success = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let login_value = login.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if let Some(problem) = validate(&login_value, &password_value, &confirm_value) {
            error.set(Some(problem));
            return;
        }

        error.set(None);
        success.set(false);
        submitting.set(true);

        leptos::task::spawn_local(async move {
            let result =
                net::auth::register_professor(login_value.trim(), &password_value, None, None)
                    .await;
            match result {
                Ok(_) => {
                    success.set(true);
                    login.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => {
                    log::warn!("admin professor registration failed: {err}");
                    error.set(Some("Não foi possível cadastrar o professor."));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <AdminLayout>
            <PageTitle
                title="Cadastrar Professor"
                description="Registre um novo professor no sistema"
            />

            <div class="card">
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success.get()>
                    <div class="alert alert--success" role="status">
                        "Professor cadastrado com sucesso!"
                    </div>
                </Show>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email de Login"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="professor@escola.br"
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
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Cadastrando..." } else { "Cadastrar Professor" }}
                        </button>
                    </div>
                </form>
            </div>
        </AdminLayout>
    }
}
