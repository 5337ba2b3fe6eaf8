//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RequireRole;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::groups::AdminGroupsPage;
use crate::pages::admin::professors::AdminProfessorsPage;
use crate::pages::admin::projects::AdminProjectsPage;
use crate::pages::admin::register_professor::AdminRegisterProfessorPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::professor::dashboard::ProfessorDashboardPage;
use crate::pages::professor::my_projects::MyProjectsPage;
use crate::pages::professor::submit_project::SubmitProjectPage;
use crate::pages::register_professor::RegisterProfessorPage;
use crate::routing;
use crate::state::session::{self, Session};

/// Root application component.
///
/// Provides the session context, resolves the stored credential once on
/// mount, and sets up client-side routing with role-gated route trees.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session signal lives for the lifetime of the application root;
    // every guard, layout, and page reads it from context.
    let session = RwSignal::new(Session::default());
    provide_context(session);

    // Initial decode of the stored credential. Reads nothing reactive, so
    // it runs once after mount.
    Effect::new(move || session::initialize(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/atlas-web.css"/>
        <Title text="Atlas"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                // Public routes.
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register-professor") view=RegisterProfessorPage/>

                // Role-based redirection at the root.
                <Route path=StaticSegment("") view=HomePage/>

                // Professor routes.
                <Route path=StaticSegment("dashboard-professor") view=ProfessorDashboardRoute/>
                <Route path=StaticSegment("submit-project") view=SubmitProjectRoute/>
                <Route path=StaticSegment("my-projects") view=MyProjectsRoute/>

                // Administrator routes.
                <Route path=StaticSegment("dashboard-admin") view=AdminDashboardRoute/>
                <Route path=StaticSegment("projects") view=AdminProjectsRoute/>
                <Route path=StaticSegment("professors") view=AdminProfessorsRoute/>
                <Route path=StaticSegment("groups") view=AdminGroupsRoute/>
                <Route path=StaticSegment("register-professor-admin") view=AdminRegisterRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProfessorDashboardRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::PROFESSOR_ONLY>
            <ProfessorDashboardPage/>
        </RequireRole>
    }
}

#[component]
fn SubmitProjectRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::PROFESSOR_ONLY>
            <SubmitProjectPage/>
        </RequireRole>
    }
}

#[component]
fn MyProjectsRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::PROFESSOR_ONLY>
            <MyProjectsPage/>
        </RequireRole>
    }
}

#[component]
fn AdminDashboardRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::ADMIN_ONLY>
            <AdminDashboardPage/>
        </RequireRole>
    }
}

#[component]
fn AdminProjectsRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::ADMIN_ONLY>
            <AdminProjectsPage/>
        </RequireRole>
    }
}

#[component]
fn AdminProfessorsRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::ADMIN_ONLY>
            <AdminProfessorsPage/>
        </RequireRole>
    }
}

#[component]
fn AdminGroupsRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::ADMIN_ONLY>
            <AdminGroupsPage/>
        </RequireRole>
    }
}

#[component]
fn AdminRegisterRoute() -> impl IntoView {
    view! {
        <RequireRole allowed=routing::ADMIN_ONLY>
            <AdminRegisterProfessorPage/>
        </RequireRole>
    }
}
