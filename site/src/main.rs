// Portfolio page - browser build (Leptos 0.8, client-side rendering)

use leptos::callback::Callback;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_page::components::PortfolioPage;
use portfolio_page::form::ContactForm;
use portfolio_page::profile::Profile;
use portfolio_page::repos::{GithubClient, start_listing_fetch};
use portfolio_page::styles::PAGE_CSS;
use portfolio_page::types::{Acknowledgment, ListingState};

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let profile = Profile::default();
    let form = RwSignal::new(ContactForm::default());
    let listing = RwSignal::new(ListingState::Loading);

    // Runs once, when the app mounts.
    match GithubClient::new(profile.github_account.clone()) {
        Ok(client) => {
            let (task, pending) = start_listing_fetch(client);
            spawn_local(task);
            spawn_local(async move { listing.set(pending.resolve().await) });
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("repository listing unavailable: {err}").into());
            listing.set(ListingState::Failed(err));
        }
    }

    let on_acknowledge = Callback::new(|ack: Acknowledgment| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(ack.message());
        }
    });

    view! {
        <style>{PAGE_CSS}</style>
        <PortfolioPage
            profile=profile
            listing=listing
            form=form
            on_acknowledge=on_acknowledge
        />
    }
}
