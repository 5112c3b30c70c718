//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    footer::Footer,
    header::Header,
    route_guard::{AuthenticatedRedirect, ProtectedRoute},
};
use crate::config::ApiConfig;
use crate::net::api::{ModerationKind, RecordKind};
use crate::net::events::AuthEvents;
use crate::net::http::HttpClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    admin::{AdminDashboardPage, AdminModerationPage, AdminRecordsPage, AdminUsersPage},
    browse::{ApplicationsPage, CompaniesPage, JournalistsPage, MediaPage, MyJobsPage},
    dashboard::DashboardPage,
    details::{ApplicationDetailsPage, CompanyProfilePage, JobDetailsPage, JournalistProfilePage},
    home::HomePage,
    jobs::JobsPage,
    login::LoginPage,
    my_media::MyMediaPage,
    register::RegisterPage,
    register_company::RegisterCompanyPage,
    register_journalist::RegisterJournalistPage,
    search::SearchPage,
};
use crate::state::session::{SessionState, SessionStore};
use crate::storage::LocalStore;
use crate::util::auth::install_unauthorized_controller;
use crate::util::guard::{ADMIN_ONLY, COMPANY_ONLY};

/// Root application component.
///
/// Builds the HTTP and session stack once, provides it as context, and
/// declares every route with its guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    log::info!("api base url {}", config.base_url);
    let events = AuthEvents::default();
    let client = HttpClient::new(config, Arc::new(BrowserTransport), Arc::new(LocalStore), events.clone());
    let store = SessionStore::new(client.clone());

    // Mirror every store change into a signal the guards can track.
    let session = RwSignal::new(store.snapshot());
    store.subscribe(move |next: &SessionState| {
        let _ = session.try_set(next.clone());
    });
    install_unauthorized_controller(&events, store.clone());

    provide_context(client);
    provide_context(store.clone());
    provide_context(session);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        store.restore().await;
    });
    #[cfg(not(feature = "csr"))]
    let _ = store;

    view! {
        <Title text="WeSourceYou"/>

        <Router>
            <Header/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <AuthenticatedRedirect><LoginPage/></AuthenticatedRedirect> }
                    />
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("register"), StaticSegment("journalist")) view=RegisterJournalistPage/>
                    <Route path=(StaticSegment("register"), StaticSegment("company")) view=RegisterCompanyPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route path=StaticSegment("jobs") view=JobsPage/>
                    <Route path=StaticSegment("journalists") view=JournalistsPage/>
                    <Route path=StaticSegment("companies") view=CompaniesPage/>
                    <Route path=StaticSegment("media") view=MediaPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route
                        path=(StaticSegment("jobs"), StaticSegment("my"))
                        view=|| view! { <ProtectedRoute allowed_roles=COMPANY_ONLY><MyJobsPage/></ProtectedRoute> }
                    />
                    <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobDetailsPage/>
                    <Route path=(StaticSegment("journalists"), ParamSegment("id")) view=JournalistProfilePage/>
                    <Route path=(StaticSegment("journalist"), ParamSegment("id")) view=JournalistProfilePage/>
                    <Route path=(StaticSegment("companies"), ParamSegment("id")) view=CompanyProfilePage/>
                    <Route path=(StaticSegment("company"), ParamSegment("id")) view=CompanyProfilePage/>
                    <Route
                        path=(StaticSegment("media"), StaticSegment("my"))
                        view=|| view! { <ProtectedRoute><MyMediaPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("applications")
                        view=|| view! { <ProtectedRoute allowed_roles=COMPANY_ONLY><ApplicationsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("applications"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute allowed_roles=COMPANY_ONLY><ApplicationDetailsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ONLY><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ONLY><AdminDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <ProtectedRoute allowed_roles=ADMIN_ONLY><AdminUsersPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("jobs"))
                        view=|| admin_queue(ModerationKind::Jobs)
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("media"))
                        view=|| admin_queue(ModerationKind::Media)
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("journalists"))
                        view=|| admin_queue(ModerationKind::Journalists)
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("companies"))
                        view=|| admin_queue(ModerationKind::Companies)
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("applications"))
                        view=|| admin_records(RecordKind::Applications)
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("purchases"))
                        view=|| admin_records(RecordKind::Purchases)
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

fn admin_queue(kind: ModerationKind) -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ADMIN_ONLY>
            <AdminModerationPage kind=kind/>
        </ProtectedRoute>
    }
}

fn admin_records(kind: RecordKind) -> impl IntoView {
    view! {
        <ProtectedRoute allowed_roles=ADMIN_ONLY>
            <AdminRecordsPage kind=kind/>
        </ProtectedRoute>
    }
}
