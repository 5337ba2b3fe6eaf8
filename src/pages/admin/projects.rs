//! Admin project management: search, filter, sort, status transitions,
//! and deletion.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::page_title::PageTitle;
use crate::components::status_badge::StatusBadge;
use crate::net;
use crate::net::types::{Project, ProjectStatus};
use crate::state::projects::{self, SortDir, SortKey};
use crate::util::dates;

fn sort_icon(sort: Option<(SortKey, SortDir)>, key: SortKey) -> &'static str {
    match sort {
        Some((active, SortDir::Asc)) if active == key => " ▲",
        Some((active, SortDir::Desc)) if active == key => " ▼",
        _ => "",
    }
}

/// Full project table for administrators, with per-row lifecycle and
/// deletion actions. Finalized projects cannot be deleted.
#[component]
pub fn AdminProjectsPage() -> impl IntoView {
    let all_projects = LocalResource::new(|| net::projects::list());
    let professors = LocalResource::new(|| net::users::list_professors());

    let search = RwSignal::new(String::new());
    let status_filter = RwSignal::new(Option::<ProjectStatus>::None);
    let sort = RwSignal::new(Option::<(SortKey, SortDir)>::None);

    let deleting = RwSignal::new(Option::<Project>::None);
    let changing = RwSignal::new(Option::<Project>::None);
    let new_status = RwSignal::new(Option::<ProjectStatus>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let names = move || {
        professors
            .get()
            .and_then(|result| result.ok())
            .map(|list| projects::professor_names(&list))
            .unwrap_or_default()
    };

    let rows = move || {
        all_projects.get().map(|result| {
            result.map(|list| {
                let mut filtered = projects::filter(
                    &list,
                    &search.get(),
                    status_filter.get(),
                    &names(),
                );
                if let Some((key, dir)) = sort.get() {
                    projects::sort(&mut filtered, key, dir);
                }
                filtered
            })
        })
    };

    let on_header_click = move |key: SortKey| {
        sort.update(|current| *current = Some(projects::toggle_sort(*current, key)));
    };

    let on_clear_filters = move |_| {
        search.set(String::new());
        status_filter.set(None);
    };

    let close_delete = Callback::new(move |()| deleting.set(None));
    let confirm_delete = Callback::new(move |()| {
        let Some(project) = deleting.get_untracked() else {
            return;
        };
        if !projects::can_delete(&project) {
            notice.set(Some("Projetos finalizados não podem ser excluídos.".to_owned()));
            deleting.set(None);
            return;
        }
        leptos::task::spawn_local(async move {
            match net::projects::delete(&project.id).await {
                Ok(()) => {
                    notice.set(Some("O projeto foi removido com sucesso.".to_owned()));
                    all_projects.refetch();
                }
                Err(err) => {
                    log::warn!("project deletion failed: {err}");
                    notice.set(Some("Não foi possível excluir o projeto.".to_owned()));
                }
            }
            deleting.set(None);
        });
    });

    let close_change = Callback::new(move |()| changing.set(None));
    let confirm_change = Callback::new(move |()| {
        let Some(project) = changing.get_untracked() else {
            return;
        };
        let Some(status) = new_status.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match net::projects::update_status(&project.id, status).await {
                Ok(_) => {
                    notice.set(Some("O status do projeto foi atualizado com sucesso.".to_owned()));
                    all_projects.refetch();
                }
                Err(err) => {
                    log::warn!("status update failed: {err}");
                    notice.set(Some("Não foi possível atualizar o status do projeto.".to_owned()));
                }
            }
            changing.set(None);
            new_status.set(None);
        });
    });

    view! {
        <AdminLayout>
            <PageTitle
                title="Gerenciar Projetos"
                description="Visualize, edite e exclua projetos do sistema"
            />

            <Show when=move || notice.get().is_some()>
                <div class="alert alert--info" role="status">
                    {move || notice.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="card filter-bar">
                <input
                    class="form__input filter-bar__search"
                    type="search"
                    placeholder="Buscar projetos..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="form__input filter-bar__status"
                    on:change=move |ev| {
                        status_filter.set(ProjectStatus::parse(&event_target_value(&ev)));
                    }
                >
                    <option value="ALL" selected=move || status_filter.get().is_none()>
                        "Todos os status"
                    </option>
                    {ProjectStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || status_filter.get() == Some(status)
                                >
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" on:click=on_clear_filters>
                    "Limpar Filtros"
                </button>
            </div>

            <div class="card">
                <Suspense fallback=move || view! { <p class="muted">"Carregando projetos..."</p> }>
                    {move || {
                        rows()
                            .map(|result| match result {
                                Ok(list) => {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th
                                                        class="table__sortable"
                                                        on:click=move |_| on_header_click(SortKey::Nome)
                                                    >
                                                        "Nome"
                                                        {move || sort_icon(sort.get(), SortKey::Nome)}
                                                    </th>
                                                    <th>"Professor"</th>
                                                    <th
                                                        class="table__sortable"
                                                        on:click=move |_| on_header_click(SortKey::DataInicio)
                                                    >
                                                        "Data de Início"
                                                        {move || sort_icon(sort.get(), SortKey::DataInicio)}
                                                    </th>
                                                    <th
                                                        class="table__sortable"
                                                        on:click=move |_| on_header_click(SortKey::Status)
                                                    >
                                                        "Status"
                                                        {move || sort_icon(sort.get(), SortKey::Status)}
                                                    </th>
                                                    <th class="table__actions">"Ações"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {if list.is_empty() {
                                                    view! {
                                                        <tr>
                                                            <td class="table__empty" colspan="5">
                                                                "Nenhum projeto encontrado."
                                                            </td>
                                                        </tr>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <ProjectRows
                                                            list=list
                                                            names=names()
                                                            deleting=deleting
                                                            changing=changing
                                                            new_status=new_status
                                                        />
                                                    }
                                                        .into_any()
                                                }}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(err) => {
                                    log::warn!("project table fetch failed: {err}");
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
            </div>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDeleteDialog
                    nome=move || deleting.get().map(|p| p.nome).unwrap_or_default()
                    on_cancel=close_delete
                    on_confirm=confirm_delete
                />
            </Show>

            <Show when=move || changing.get().is_some()>
                <ChangeStatusDialog
                    nome=move || changing.get().map(|p| p.nome).unwrap_or_default()
                    current=move || changing.get().map(|p| p.status)
                    new_status=new_status
                    on_cancel=close_change
                    on_confirm=confirm_change
                />
            </Show>
        </AdminLayout>
    }
}

#[component]
fn ProjectRows(
    list: Vec<Project>,
    names: HashMap<String, String>,
    deleting: RwSignal<Option<Project>>,
    changing: RwSignal<Option<Project>>,
    new_status: RwSignal<Option<ProjectStatus>>,
) -> impl IntoView {
    list.into_iter()
        .map(|project| {
            let professor = names
                .get(&project.professor_id)
                .cloned()
                .unwrap_or_else(|| project.professor_id.clone());
            let deletable = projects::can_delete(&project);
            let for_change = project.clone();
            let for_delete = project.clone();

            view! {
                <tr>
                    <td class="table__name">{project.nome.clone()}</td>
                    <td>{professor}</td>
                    <td>{dates::format_display(&project.data_inicio)}</td>
                    <td>
                        <StatusBadge status=project.status/>
                    </td>
                    <td class="table__actions">
                        <button
                            class="btn btn--small"
                            on:click=move |_| {
                                new_status.set(Some(for_change.status));
                                changing.set(Some(for_change.clone()));
                            }
                        >
                            "Alterar Status"
                        </button>
                        <button
                            class="btn btn--small btn--danger"
                            disabled=!deletable
                            title=if deletable { "Excluir projeto" } else { "Projetos finalizados não podem ser excluídos" }
                            on:click=move |_| deleting.set(Some(for_delete.clone()))
                        >
                            "Excluir"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
fn ConfirmDeleteDialog(
    nome: impl Fn() -> String + Send + Sync + 'static,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Confirmar Exclusão"</h2>
                <p>
                    "Você tem certeza que deseja excluir o projeto " <strong>{nome}</strong>
                    "? Esta ação não pode ser desfeita."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Excluir"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ChangeStatusDialog(
    nome: impl Fn() -> String + Send + Sync + 'static,
    current: impl Fn() -> Option<ProjectStatus> + Send + Sync + Copy + 'static,
    new_status: RwSignal<Option<ProjectStatus>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let unchanged = move || new_status.get().is_none() || new_status.get() == current();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Alterar Status do Projeto"</h2>
                <p>"Altere o status do projeto " <strong>{nome}</strong> "."</p>
                <select
                    class="form__input"
                    on:change=move |ev| {
                        new_status.set(ProjectStatus::parse(&event_target_value(&ev)));
                    }
                >
                    {ProjectStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || new_status.get() == Some(status)
                                >
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=unchanged
                        on:click=move |_| on_confirm.run(())
                    >
                        "Salvar"
                    </button>
                </div>
            </div>
        </div>
    }
}
