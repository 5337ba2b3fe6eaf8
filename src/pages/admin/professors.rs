//! Admin professor management: search, edit, delete.

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::page_title::PageTitle;
use crate::net;
use crate::net::types::{User, UserUpdate};

/// Case-insensitive search over nome, login, and escola.
fn filter_professors(professors: &[User], term: &str) -> Vec<User> {
    let term = term.trim().to_lowercase();
    professors
        .iter()
        .filter(|professor| {
            if term.is_empty() {
                return true;
            }
            professor
                .nome
                .as_deref()
                .is_some_and(|nome| nome.to_lowercase().contains(&term))
                || professor.login.to_lowercase().contains(&term)
                || professor
                    .escola
                    .as_deref()
                    .is_some_and(|escola| escola.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Professor account table with edit and delete dialogs.
#[component]
pub fn AdminProfessorsPage() -> impl IntoView {
    let professors = LocalResource::new(|| net::users::list_professors());

    let search = RwSignal::new(String::new());
    let deleting = RwSignal::new(Option::<User>::None);
    let editing = RwSignal::new(Option::<User>::None);
    let notice = RwSignal::new(Option::<String>::None);

    // Edit form fields, seeded when a professor is selected.
    let edit_nome = RwSignal::new(String::new());
    let edit_escola = RwSignal::new(String::new());
    let edit_login = RwSignal::new(String::new());

    let rows = move || {
        professors
            .get()
            .map(|result| result.map(|list| filter_professors(&list, &search.get())))
    };

    let open_edit = move |professor: User| {
        edit_nome.set(professor.nome.clone().unwrap_or_default());
        edit_escola.set(professor.escola.clone().unwrap_or_default());
        edit_login.set(professor.login.clone());
        editing.set(Some(professor));
    };

    let close_edit = Callback::new(move |()| editing.set(None));
    let save_edit = Callback::new(move |()| {
        let Some(professor) = editing.get_untracked() else {
            return;
        };
        let nome = edit_nome.get_untracked();
        let escola = edit_escola.get_untracked();
        let login = edit_login.get_untracked();
        if nome.trim().is_empty() || escola.trim().is_empty() || login.trim().is_empty() {
            notice.set(Some("Preencha todos os campos para salvar.".to_owned()));
            return;
        }
        leptos::task::spawn_local(async move {
            let update = UserUpdate {
                login: login.trim().to_owned(),
                nome: Some(nome.trim().to_owned()),
                escola: Some(escola.trim().to_owned()),
            };
            match net::users::update_professor(&professor.id, &update).await {
                Ok(_) => {
                    notice.set(Some("Professor atualizado com sucesso.".to_owned()));
                    professors.refetch();
                }
                Err(err) => {
                    log::warn!("professor update failed: {err}");
                    notice.set(Some("Não foi possível atualizar o professor.".to_owned()));
                }
            }
            editing.set(None);
        });
    });

    let close_delete = Callback::new(move |()| deleting.set(None));
    let confirm_delete = Callback::new(move |()| {
        let Some(professor) = deleting.get_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match net::users::delete_professor(&professor.id).await {
                Ok(()) => {
                    notice.set(Some("Professor removido com sucesso.".to_owned()));
                    professors.refetch();
                }
                Err(err) => {
                    log::warn!("professor deletion failed: {err}");
                    notice.set(Some("Não foi possível remover o professor.".to_owned()));
                }
            }
            deleting.set(None);
        });
    });

    view! {
        <AdminLayout>
            <PageTitle
                title="Professores"
                description="Gerencie os professores cadastrados no sistema"
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
                    placeholder="Buscar por nome, login ou escola..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <div class="card">
                <Suspense fallback=move || view! { <p class="muted">"Carregando professores..."</p> }>
                    {move || {
                        rows()
                            .map(|result| match result {
                                Ok(list) => {
                                    if list.is_empty() {
                                        view! {
                                            <p class="muted">"Nenhum professor encontrado."</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Nome"</th>
                                                        <th>"Login"</th>
                                                        <th>"Escola"</th>
                                                        <th class="table__actions">"Ações"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list
                                                        .into_iter()
                                                        .map(|professor| {
                                                            let for_edit = professor.clone();
                                                            let for_delete = professor.clone();
                                                            view! {
                                                                <tr>
                                                                    <td class="table__name">
                                                                        {professor.display_name().to_owned()}
                                                                    </td>
                                                                    <td>{professor.login.clone()}</td>
                                                                    <td>
                                                                        {professor
                                                                            .escola
                                                                            .clone()
                                                                            .unwrap_or_else(|| "—".to_owned())}
                                                                    </td>
                                                                    <td class="table__actions">
                                                                        <button
                                                                            class="btn btn--small"
                                                                            on:click=move |_| open_edit(for_edit.clone())
                                                                        >
                                                                            "Editar"
                                                                        </button>
                                                                        <button
                                                                            class="btn btn--small btn--danger"
                                                                            on:click=move |_| deleting.set(Some(for_delete.clone()))
                                                                        >
                                                                            "Excluir"
                                                                        </button>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    log::warn!("professor list fetch failed: {err}");
                                    view! {
                                        <div class="alert alert--error">
                                            "Não foi possível carregar a lista de professores."
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>

            <Show when=move || editing.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| close_edit.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Editar Professor"</h2>
                        <label class="form__label">
                            "Nome"
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || edit_nome.get()
                                on:input=move |ev| edit_nome.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Escola"
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || edit_escola.get()
                                on:input=move |ev| edit_escola.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Login"
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || edit_login.get()
                                on:input=move |ev| edit_login.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close_edit.run(())>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| save_edit.run(())>
                                "Salvar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || deleting.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| close_delete.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Confirmar Exclusão"</h2>
                        <p>
                            "Você tem certeza que deseja excluir o professor "
                            <strong>
                                {move || {
                                    deleting
                                        .get()
                                        .map(|professor| professor.display_name().to_owned())
                                        .unwrap_or_default()
                                }}
                            </strong> "? Esta ação não pode ser desfeita."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| close_delete.run(())>
                                "Cancelar"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| confirm_delete.run(())>
                                "Excluir"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </AdminLayout>
    }
}
