//! Listing pages backed by a single collection endpoint.

use leptos::prelude::*;

use crate::components::resource_list::ResourceList;
use crate::net::api::{COMPANIES_PATH, JOURNALISTS_PATH, MEDIA_PATH, MY_COMPANY_APPLICATIONS_PATH, MY_COMPANY_JOBS_PATH};

#[component]
pub fn JournalistsPage() -> impl IntoView {
    view! { <ResourceList title="Journalists" path=JOURNALISTS_PATH link_base="/journalists" empty="No journalists yet."/> }
}

#[component]
pub fn CompaniesPage() -> impl IntoView {
    view! { <ResourceList title="Companies" path=COMPANIES_PATH link_base="/companies" empty="No companies yet."/> }
}

#[component]
pub fn MediaPage() -> impl IntoView {
    view! { <ResourceList title="Media marketplace" path=MEDIA_PATH empty="No media content yet."/> }
}

/// Company only.
#[component]
pub fn MyJobsPage() -> impl IntoView {
    view! { <ResourceList title="My jobs" path=MY_COMPANY_JOBS_PATH link_base="/jobs" empty="You have not posted any jobs."/> }
}

/// Company only.
#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <ResourceList title="Applications" path=MY_COMPANY_APPLICATIONS_PATH link_base="/applications" empty="No applications received."/>
    }
}
