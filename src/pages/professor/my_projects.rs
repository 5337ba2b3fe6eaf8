//! Professor's own project list with the finalization acknowledgement.

use leptos::prelude::*;

use crate::components::layout::ProfessorLayout;
use crate::components::page_title::PageTitle;
use crate::components::status_badge::StatusBadge;
use crate::net;
use crate::net::api::ApiError;
use crate::net::types::{Project, ProjectStatus};
use crate::routing::paths;
use crate::state::projects;
use crate::state::session::Session;
use crate::util::dates;

/// Card list of the professor's projects. Finalized projects offer a
/// confirm-receipt dialog; rejected projects show a terminal marker.
#[component]
pub fn MyProjectsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let all_projects = LocalResource::new(|| net::projects::list());
    let confirming = RwSignal::new(Option::<Project>::None);
    let notice = RwSignal::new(Option::<&'static str>::None);

    let owner_id = move || {
        session.with(|s| {
            s.identity()
                .map(|identity| identity.id.clone())
                .unwrap_or_default()
        })
    };
    let own_projects = move || {
        all_projects
            .get()
            .map(|result| result.map(|list| projects::owned_by(&list, &owner_id())))
    };

    let on_cancel = Callback::new(move |()| confirming.set(None));
    let on_confirm = Callback::new(move |()| {
        let Some(project) = confirming.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            // The backend models no separate acknowledgement flag; the
            // confirmation re-writes the terminal status.
            match net::projects::update_status(&project.id, ProjectStatus::Finalizado).await {
                Ok(_) => {
                    notice.set(Some("Você confirmou o recebimento do projeto finalizado."));
                    all_projects.refetch();
                }
                Err(err) => {
                    log::warn!("acknowledgement failed: {err}");
                    notice.set(Some("Não foi possível confirmar o projeto."));
                }
            }
            confirming.set(None);
        });
    });

    view! {
        <ProfessorLayout>
            <PageTitle
                title="Meus Projetos"
                description="Acompanhe todos os seus projetos solicitados"
            />

            <Show when=move || notice.get().is_some()>
                <div class="alert alert--info" role="status">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>

            <Suspense fallback=move || view! { <p class="muted">"Carregando projetos..."</p> }>
                {move || {
                    own_projects()
                        .map(|result| match result {
                            Ok(list) => {
                                view! { <ProjectCards projects=list confirming=confirming/> }
                                    .into_any()
                            }
                            Err(err) => view! { <FetchError err=err/> }.into_any(),
                        })
                }}
            </Suspense>

            <Show when=move || confirming.get().is_some()>
                <ConfirmReceiptDialog
                    nome=move || {
                        confirming
                            .get()
                            .map(|project| project.nome)
                            .unwrap_or_default()
                    }
                    on_cancel=on_cancel
                    on_confirm=on_confirm
                />
            </Show>
        </ProfessorLayout>
    }
}

#[component]
fn FetchError(err: ApiError) -> impl IntoView {
    log::warn!("project list fetch failed: {err}");
    view! {
        <div class="alert alert--error">
            "Não foi possível carregar os projetos. Tente novamente."
        </div>
    }
}

#[component]
fn ProjectCards(projects: Vec<Project>, confirming: RwSignal<Option<Project>>) -> impl IntoView {
    if projects.is_empty() {
        return view! {
            <div class="card card--empty">
                <p>"Você ainda não solicitou nenhum projeto."</p>
                <a class="btn btn--primary" href=paths::SUBMIT_PROJECT>
                    "Solicitar Projeto"
                </a>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="card-grid">
            {projects
                .into_iter()
                .map(|project| {
                    let footer = match project.status {
                        ProjectStatus::Finalizado => {
                            let candidate = project.clone();
                            view! {
                                <button
                                    class="btn btn--outline btn--block"
                                    on:click=move |_| confirming.set(Some(candidate.clone()))
                                >
                                    "Confirmar Recebimento"
                                </button>
                            }
                                .into_any()
                        }
                        ProjectStatus::ProjetoRecusado => {
                            view! {
                                <span class="project-card__rejected">"Projeto Recusado"</span>
                            }
                                .into_any()
                        }
                        _ => view! { <span class="muted">"Em acompanhamento"</span> }.into_any(),
                    };

                    view! {
                        <div class="card project-card">
                            <header class="project-card__header">
                                <h3 class="project-card__name">{project.nome.clone()}</h3>
                                <StatusBadge status=project.status/>
                            </header>
                            <p class="muted">
                                "Início: " {dates::format_display(&project.data_inicio)}
                            </p>
                            <div class="project-card__section">
                                <h4>"Objetivo"</h4>
                                <p class="muted">{project.objetivo.clone()}</p>
                            </div>
                            <div class="project-card__section">
                                <h4>"Público-alvo"</h4>
                                <p class="muted">{project.publico_alvo.clone()}</p>
                            </div>
                            <footer class="project-card__footer">{footer}</footer>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

/// Confirmation dialog for acknowledging a finalized project.
#[component]
fn ConfirmReceiptDialog(
    nome: impl Fn() -> String + Send + Sync + 'static,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirmar Recebimento"</h2>
                <p>
                    "Você está confirmando o recebimento do projeto finalizado "
                    <strong>{nome}</strong> ". Esta ação não pode ser desfeita."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Confirmar Recebimento"
                    </button>
                </div>
            </div>
        </div>
    }
}
