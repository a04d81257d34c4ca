//! Project grid built from the fetched repository listing.

use leptos::prelude::*;

use crate::types::{ListingState, RepoRecord};

/// Muted note shown when the listing request failed.
pub const PROJECTS_UNAVAILABLE: &str = "Projects could not be loaded right now.";

/// One card per repository, in listing order.
///
/// No pagination: every record gets a card. While the request is pending
/// (or if it never resolves) the grid is simply empty.
#[component]
pub fn Projects(
    /// Current state of the page-load fetch
    #[prop(into)]
    listing: Signal<ListingState>,
) -> impl IntoView {
    let cards = move || {
        listing.with(|state| {
            state
                .records()
                .iter()
                .cloned()
                .map(|repo| view! { <ProjectCard repo=repo /> })
                .collect::<Vec<_>>()
        })
    };

    let unavailable = move || {
        listing.with(ListingState::is_failed).then(|| {
            view! { <p class="projects-empty">{PROJECTS_UNAVAILABLE}</p> }
        })
    };

    view! {
        <section id="projects" class="section section-wide reveal">
            <h2 class="section-title">"Featured Projects"</h2>
            <div class="project-grid">{cards}</div>
            {unavailable}
        </section>
    }
}

/// Clickable card linking to the repository.
#[component]
pub fn ProjectCard(repo: RepoRecord) -> impl IntoView {
    let title = repo.display_title();
    let description = repo.display_description().to_string();

    view! {
        <a class="project-card" href=repo.html_url target="_blank" rel="noopener noreferrer">
            <h3 class="project-title">{title}</h3>
            <p class="project-description">{description}</p>
        </a>
    }
}
