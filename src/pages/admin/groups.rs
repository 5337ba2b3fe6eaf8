//! Student work-group management. Groups live only in local page state;
//! there is no group boundary on the backend.

use leptos::prelude::*;

use crate::components::layout::AdminLayout;
use crate::components::page_title::PageTitle;
use crate::net::types::Group;
use crate::state::groups;

/// Group roster with create, availability toggle, and student add/remove.
#[component]
pub fn AdminGroupsPage() -> impl IntoView {
    let roster = RwSignal::new(groups::demo_roster());

    let creating = RwSignal::new(false);
    let new_nome = RwSignal::new(String::new());
    let new_coordenador = RwSignal::new(String::new());
    let new_disponivel = RwSignal::new(true);
    let create_error = RwSignal::new(Option::<&'static str>::None);

    // Which group is receiving a student, if any.
    let adding_to = RwSignal::new(Option::<String>::None);
    let new_aluno = RwSignal::new(String::new());

    let open_create = move |_| {
        new_nome.set(String::new());
        new_coordenador.set(String::new());
        new_disponivel.set(true);
        create_error.set(None);
        creating.set(true);
    };

    let on_create = Callback::new(move |()| {
        let nome = new_nome.get_untracked();
        let coordenador = new_coordenador.get_untracked();
        if nome.trim().is_empty() {
            create_error.set(Some("Nome é obrigatório"));
            return;
        }
        if coordenador.trim().is_empty() {
            create_error.set(Some("Coordenador é obrigatório"));
            return;
        }
        roster.update(|items| {
            groups::create(items, &nome, &coordenador, new_disponivel.get_untracked());
        });
        creating.set(false);
    });

    let on_add_aluno = Callback::new(move |()| {
        let Some(group_id) = adding_to.get_untracked() else {
            return;
        };
        let aluno = new_aluno.get_untracked();
        if aluno.trim().is_empty() {
            return;
        }
        roster.update(|items| groups::add_student(items, &group_id, &aluno));
        new_aluno.set(String::new());
        adding_to.set(None);
    });

    view! {
        <AdminLayout>
            <PageTitle
                title="Gerenciar Grupos"
                description="Visualize e gerencie os grupos de trabalho"
            />

            <div class="toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "Novo Grupo"
                </button>
            </div>

            <div class="card-grid">
                {move || {
                    roster
                        .get()
                        .into_iter()
                        .map(|group| view! { <GroupCard group=group roster=roster adding_to=adding_to/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || creating.get()>
                <div class="dialog-backdrop" on:click=move |_| creating.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Criar Novo Grupo"</h2>
                        <p class="muted">"Preencha as informações do novo grupo de trabalho."</p>

                        <Show when=move || create_error.get().is_some()>
                            <div class="alert alert--error" role="alert">
                                {move || create_error.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <label class="form__label">
                            "Nome"
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Nome do grupo"
                                prop:value=move || new_nome.get()
                                on:input=move |ev| new_nome.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Professor Coordenador"
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Nome do coordenador"
                                prop:value=move || new_coordenador.get()
                                on:input=move |ev| new_coordenador.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label form__label--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || new_disponivel.get()
                                on:change=move |ev| new_disponivel.set(event_target_checked(&ev))
                            />
                            "Disponível para novos projetos"
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| creating.set(false)>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                                "Criar Grupo"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || adding_to.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| adding_to.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Adicionar Aluno"</h2>
                        <label class="form__label">
                            "Nome do Aluno"
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Digite o nome do aluno"
                                prop:value=move || new_aluno.get()
                                on:input=move |ev| new_aluno.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add_aluno.run(());
                                    }
                                }
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| adding_to.set(None)>
                                "Cancelar"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| on_add_aluno.run(())>
                                "Adicionar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </AdminLayout>
    }
}

#[component]
fn GroupCard(
    group: Group,
    roster: RwSignal<Vec<Group>>,
    adding_to: RwSignal<Option<String>>,
) -> impl IntoView {
    let group_id = group.id.clone();
    let toggle_id = group.id.clone();
    let add_id = group.id.clone();

    let availability = if group.disponivel {
        view! { <span class="badge badge--available">"Disponível"</span> }.into_any()
    } else {
        view! { <span class="badge badge--unavailable">"Indisponível"</span> }.into_any()
    };
    let linked = group.projeto_id.clone().map(|projeto_id| {
        view! { <span class="badge badge--linked">{format!("Projeto: {projeto_id}")}</span> }
    });

    view! {
        <div class="card group-card">
            <header class="group-card__header">
                <h3 class="group-card__name">{group.nome.clone()}</h3>
                <div class="group-card__badges">{availability} {linked}</div>
            </header>
            <p class="muted">"Coordenador: " {group.professor_coordenador.clone()}</p>

            <div class="group-card__students">
                <h4>{format!("Alunos ({})", group.alunos.len())}</h4>
                {if group.alunos.is_empty() {
                    view! { <p class="muted">"Nenhum aluno no grupo."</p> }.into_any()
                } else {
                    view! {
                        <ul class="chip-list">
                            {group
                                .alunos
                                .iter()
                                .enumerate()
                                .map(|(index, aluno)| {
                                    let remove_id = group_id.clone();
                                    view! {
                                        <li class="chip">
                                            {aluno.clone()}
                                            <button
                                                class="chip__remove"
                                                title="Remover aluno"
                                                on:click=move |_| {
                                                    roster
                                                        .update(|items| {
                                                            groups::remove_student(items, &remove_id, index);
                                                        });
                                                }
                                            >
                                                "×"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>

            <footer class="group-card__footer">
                <button
                    class="btn btn--small"
                    on:click=move |_| adding_to.set(Some(add_id.clone()))
                >
                    "Adicionar Aluno"
                </button>
                <label class="form__label form__label--inline">
                    <input
                        type="checkbox"
                        prop:checked=group.disponivel
                        on:change=move |_| {
                            roster.update(|items| groups::toggle_availability(items, &toggle_id));
                        }
                    />
                    "Disponível"
                </label>
            </footer>
        </div>
    }
}
