//! Administrator dashboard: system-wide overview.

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::page_title::PageTitle;
use crate::components::status_badge::StatusBadge;
use crate::net;
use crate::net::types::{Project, ProjectStatus};
use crate::routing::paths;
use crate::state::{groups, projects};
use crate::util::dates;

/// Overview of the whole system: totals, completion rate, per-status
/// breakdown, and the five most recent projects.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let all_projects = LocalResource::new(|| net::projects::list());
    let professors = LocalResource::new(|| net::users::list_professors());

    let professor_count = move || {
        professors
            .get()
            .and_then(|result| result.ok())
            .map_or(0, |list| list.len())
    };
    // Groups have no backend boundary; the active count comes from the
    // local roster seed.
    let active_groups = groups::demo_roster()
        .iter()
        .filter(|group| group.disponivel)
        .count();

    view! {
        <AdminLayout>
            <PageTitle
                title="Dashboard do Administrador"
                description="Visão geral do sistema Atlas"
            />

            <Suspense fallback=move || view! { <p class="muted">"Carregando dados..."</p> }>
                {move || {
                    all_projects
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <DashboardBody
                                        items=list
                                        professor_count=professor_count()
                                        active_groups=active_groups
                                    />
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                log::warn!("admin dashboard fetch failed: {err}");
                                view! {
                                    <div class="alert alert--error">
                                        "Não foi possível carregar os dados. Tente novamente."
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </AdminLayout>
    }
}

#[component]
fn DashboardBody(
    items: Vec<Project>,
    professor_count: usize,
    active_groups: usize,
) -> impl IntoView {
    let recent = projects::most_recent(&items, 5);
    let completion = projects::completion_rate(&items);
    let total = items.len();

    view! {
        <div class="stat-grid">
            <div class="stat-card">
                <span class="stat-card__label">"Total de Projetos"</span>
                <span class="stat-card__value">{total}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Professores Cadastrados"</span>
                <span class="stat-card__value">{professor_count}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Grupos Ativos"</span>
                <span class="stat-card__value">{active_groups}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Taxa de Conclusão"</span>
                <span class="stat-card__value">{format!("{completion}%")}</span>
            </div>
        </div>

        <div class="stat-grid stat-grid--statuses">
            {ProjectStatus::ALL
                .into_iter()
                .map(|status| {
                    let count = projects::count_with_status(&items, status);
                    view! {
                        <div class="stat-card stat-card--small">
                            <span class="stat-card__label">{status.label()}</span>
                            <span class="stat-card__value">{count}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        <section class="card">
            <h3 class="card__section-title">"Projetos Recentes"</h3>
            {if recent.is_empty() {
                view! { <p class="muted">"Nenhum projeto cadastrado ainda."</p> }.into_any()
            } else {
                view! {
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
                }
                    .into_any()
            }}
            <a class="link" href=paths::ADMIN_PROJECTS>
                "Gerenciar todos os projetos"
            </a>
        </section>
    }
}
