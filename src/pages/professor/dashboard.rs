//! Professor dashboard: own-project overview.

use leptos::prelude::*;

use crate::components::layout::ProfessorLayout;
use crate::components::page_title::PageTitle;
use crate::components::status_badge::StatusBadge;
use crate::net;
use crate::net::types::{Project, ProjectStatus};
use crate::routing::paths;
use crate::state::projects;
use crate::state::session::Session;
use crate::util::dates;

/// Dashboard listing the signed-in professor's projects: status counters
/// and the five most recent requests.
#[component]
pub fn ProfessorDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let all_projects = LocalResource::new(|| net::projects::list());

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

    view! {
        <ProfessorLayout>
            <PageTitle
                title="Dashboard do Professor"
                description="Acompanhe seus projetos e requisições"
            />

            <Suspense fallback=move || view! { <p class="muted">"Carregando projetos..."</p> }>
                {move || {
                    own_projects()
                        .map(|result| match result {
                            Ok(list) => view! { <DashboardBody items=list/> }.into_any(),
                            Err(err) => {
                                log::warn!("dashboard fetch failed: {err}");
                                view! {
                                    <div class="alert alert--error">
                                        "Não foi possível carregar os projetos. Tente novamente."
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </ProfessorLayout>
    }
}

#[component]
fn DashboardBody(items: Vec<Project>) -> impl IntoView {
    let recent = projects::most_recent(&items, 5);
    let total = items.len();

    view! {
        <div class="stat-grid">
            <div class="stat-card">
                <span class="stat-card__label">"Total de Projetos"</span>
                <span class="stat-card__value">{total}</span>
            </div>
            {ProjectStatus::ALL
                .into_iter()
                .map(|status| {
                    let count = projects::count_with_status(&items, status);
                    view! {
                        <div class="stat-card">
                            <span class="stat-card__label">{status.label()}</span>
                            <span class="stat-card__value">{count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        {if items.is_empty() {
            view! {
                <div class="card card--empty">
                    <p>"Você ainda não solicitou nenhum projeto."</p>
                    <a class="btn btn--primary" href=paths::SUBMIT_PROJECT>
                        "Solicitar Projeto"
                    </a>
                </div>
            }
                .into_any()
        } else {
            view! {
                <section class="card">
                    <h3 class="card__section-title">"Projetos Recentes"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Data de Início"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {recent
                                .into_iter()
                                .map(|project| {
                                    view! {
                                        <tr>
                                            <td class="table__name">{project.nome.clone()}</td>
                                            <td>{dates::format_display(&project.data_inicio)}</td>
                                            <td>
                                                <StatusBadge status=project.status/>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                    <a class="link" href=paths::MY_PROJECTS>
                        "Ver todos os projetos"
                    </a>
                </section>
            }
                .into_any()
        }}
    }
}
