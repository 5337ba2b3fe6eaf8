//! Role-specific application shells: sidebar navigation, current user,
//! and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routing::paths;
use crate::state::session::{self, Session};

/// One sidebar navigation entry.
struct NavItem {
    label: &'static str,
    path: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: paths::ADMIN_DASHBOARD },
    NavItem { label: "Projetos", path: paths::ADMIN_PROJECTS },
    NavItem { label: "Cadastrar Professor", path: paths::ADMIN_REGISTER_PROFESSOR },
    NavItem { label: "Professores", path: paths::ADMIN_PROFESSORS },
    NavItem { label: "Grupos", path: paths::ADMIN_GROUPS },
];

const PROFESSOR_NAV: &[NavItem] = &[
    NavItem { label: "Dashboard", path: paths::PROFESSOR_DASHBOARD },
    NavItem { label: "Solicitar Projeto", path: paths::SUBMIT_PROJECT },
    NavItem { label: "Meus Projetos", path: paths::MY_PROJECTS },
];

/// Shell for administrator screens.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    view! { <SidebarLayout role_label="Administrador" items=ADMIN_NAV>{children()}</SidebarLayout> }
}

/// Shell for professor screens.
#[component]
pub fn ProfessorLayout(children: Children) -> impl IntoView {
    view! { <SidebarLayout role_label="Professor" items=PROFESSOR_NAV>{children()}</SidebarLayout> }
}

#[component]
fn SidebarLayout(
    role_label: &'static str,
    items: &'static [NavItem],
    children: Children,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let login_name = move || {
        session.with(|s| {
            s.identity()
                .map(|identity| identity.login.clone())
                .unwrap_or_default()
        })
    };
    let initial = move || {
        login_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "A".to_owned())
    };

    let on_logout = move |_| {
        session::logout(session);
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">
                    <h1 class="layout__brand-name">"Atlas"</h1>
                </div>
                <nav class="layout__nav">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <a class="layout__nav-link" href=item.path>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="layout__user">
                    <span class="layout__avatar">{initial}</span>
                    <div class="layout__user-info">
                        <p class="layout__user-login">{login_name}</p>
                        <p class="layout__user-role">{role_label}</p>
                    </div>
                    <button class="layout__logout" title="Sair" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </aside>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
