//! Project request form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::ProfessorLayout;
use crate::components::page_title::PageTitle;
use crate::net;
use crate::net::types::{NewProject, ProjectStatus};
use crate::routing::paths;
use crate::state::projects;
use crate::state::session::Session;
use crate::util::dates;

fn validate(
    nome: &str,
    objetivo: &str,
    data_inicio: &str,
    escopo: &str,
    publico_alvo: &str,
) -> Option<&'static str> {
    if nome.trim().is_empty() {
        return Some("Nome é obrigatório");
    }
    if objetivo.trim().is_empty() {
        return Some("Objetivo é obrigatório");
    }
    if dates::date_input_to_iso(data_inicio).is_none() {
        return Some("Data de início é obrigatória");
    }
    if dates::is_before(data_inicio, dates::today()) {
        return Some("Data de início não pode estar no passado");
    }
    if escopo.trim().is_empty() {
        return Some("Escopo é obrigatório");
    }
    if publico_alvo.trim().is_empty() {
        return Some("Público-alvo é obrigatório");
    }
    None
}

/// Form for requesting a new project. Checks the name for duplicates
/// against the existing project list before submitting, creates the
/// request awaiting preliminary review, then returns to the project list.
#[component]
pub fn SubmitProjectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let objetivo = RwSignal::new(String::new());
    let data_inicio = RwSignal::new(String::new());
    let escopo = RwSignal::new(String::new());
    let publico_alvo = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<&'static str>::None);
    let success = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let Some(professor_id) =
            session.with_untracked(|s| s.identity().map(|identity| identity.id.clone()))
        else {
            error.set(Some("Usuário não autenticado"));
            return;
        };

        let nome_value = nome.get_untracked();
        let objetivo_value = objetivo.get_untracked();
        let data_value = data_inicio.get_untracked();
        let escopo_value = escopo.get_untracked();
        let publico_value = publico_alvo.get_untracked();

        if let Some(problem) = validate(
            &nome_value,
            &objetivo_value,
            &data_value,
            &escopo_value,
            &publico_value,
        ) {
            error.set(Some(problem));
            return;
        }

        error.set(None);
        success.set(false);
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = submit(
                &nome_value,
                &objetivo_value,
                &data_value,
                &escopo_value,
                &publico_value,
                &professor_id,
            )
            .await;
            match result {
                Ok(()) => {
                    success.set(true);
                    nome.set(String::new());
                    objetivo.set(String::new());
                    data_inicio.set(String::new());
                    escopo.set(String::new());
                    publico_alvo.set(String::new());

                    // Let the confirmation register before leaving the page.
                    #[cfg(feature = "csr")]
                    gloo_timers::future::TimeoutFuture::new(2_000).await;
                    navigate(paths::MY_PROJECTS, Default::default());
                }
                Err(problem) => error.set(Some(problem)),
            }
            submitting.set(false);
        });
    };

    view! {
        <ProfessorLayout>
            <PageTitle
                title="Solicitar Novo Projeto"
                description="Preencha o formulário com os detalhes do projeto que deseja solicitar"
            />

            <div class="card">
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Show when=move || success.get()>
                    <div class="alert alert--success" role="status">
                        "Projeto solicitado com sucesso! Aguarde a análise preliminar."
                    </div>
                </Show>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Nome do Projeto"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Digite o nome do projeto"
                            prop:value=move || nome.get()
                            on:input=move |ev| nome.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                        <span class="form__hint">
                            "O nome deve ser único para identificar o projeto"
                        </span>
                    </label>
                    <label class="form__label">
                        "Objetivo"
                        <textarea
                            class="form__textarea"
                            placeholder="Descreva o objetivo do projeto"
                            prop:value=move || objetivo.get()
                            on:input=move |ev| objetivo.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        ></textarea>
                    </label>
                    <label class="form__label">
                        "Data de Início"
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || data_inicio.get()
                            on:input=move |ev| data_inicio.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        />
                    </label>
                    <label class="form__label">
                        "Escopo"
                        <textarea
                            class="form__textarea"
                            placeholder="Descreva o escopo do projeto"
                            prop:value=move || escopo.get()
                            on:input=move |ev| escopo.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        ></textarea>
                    </label>
                    <label class="form__label">
                        "Público-alvo"
                        <textarea
                            class="form__textarea"
                            placeholder="Defina o público-alvo do projeto"
                            prop:value=move || publico_alvo.get()
                            on:input=move |ev| publico_alvo.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                        ></textarea>
                    </label>
                    <div class="form__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || {
                                if submitting.get() {
                                    "Enviando solicitação..."
                                } else {
                                    "Solicitar Projeto"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </ProfessorLayout>
    }
}

/// Duplicate-name check followed by creation. Returns a user-facing
/// message on any failure.
async fn submit(
    nome: &str,
    objetivo: &str,
    data_inicio: &str,
    escopo: &str,
    publico_alvo: &str,
    professor_id: &str,
) -> Result<(), &'static str> {
    let existing = net::projects::list().await.map_err(|err| {
        log::warn!("duplicate-name check failed: {err}");
        "Erro ao solicitar projeto. Tente novamente mais tarde."
    })?;
    if projects::name_exists(&existing, nome) {
        return Err("Já existe um projeto com este nome. Por favor, escolha outro nome.");
    }

    let data_inicio = dates::date_input_to_iso(data_inicio)
        .ok_or("Data de início é obrigatória")?;

    net::projects::create(&NewProject {
        nome: nome.trim().to_owned(),
        objetivo: objetivo.trim().to_owned(),
        data_inicio,
        escopo: escopo.trim().to_owned(),
        publico_alvo: publico_alvo.trim().to_owned(),
        status: ProjectStatus::AguardandoAnalisePreliminar,
        professor_id: professor_id.to_owned(),
    })
    .await
    .map_err(|err| {
        log::warn!("project creation failed: {err}");
        "Erro ao solicitar projeto. Tente novamente mais tarde."
    })?;

    Ok(())
}
