//! The page body, shared by the static export and the browser build.

use leptos::callback::Callback;
use leptos::prelude::*;

use super::{About, ActivityGraph, Contact, Footer, Hero, Projects};
use crate::form::ContactForm;
use crate::profile::Profile;
use crate::types::{Acknowledgment, ListingState};

/// Every section of the portfolio, top to bottom.
#[component]
pub fn PortfolioPage(
    profile: Profile,
    /// Page-load repository fetch
    #[prop(into)]
    listing: Signal<ListingState>,
    /// Contact form state
    form: RwSignal<ContactForm>,
    /// Shows the submission acknowledgment to the visitor; without one the
    /// contact form is inert
    #[prop(optional, into)]
    on_acknowledge: Option<Callback<Acknowledgment>>,
) -> impl IntoView {
    let bio = profile.bio.clone();
    let image_url = profile.activity_graph_url();
    let copyright = profile.copyright();

    view! {
        <main class="portfolio">
            <Hero profile=profile />
            <About bio=bio />
            <Projects listing=listing />
            <ActivityGraph image_url=image_url />
            <Contact form=form on_acknowledge=on_acknowledge />
            <Footer copyright=copyright />
        </main>
    }
}
