//! # portfolio-page
//!
//! A personal portfolio page built from [Leptos](https://leptos.dev/)
//! components: hero banner, about-me blurb, a project grid fed by the GitHub
//! repository listing, an embedded activity graph and a demo contact form.
//!
//! The same components render two ways:
//!
//! - **Static export** (`ssr` feature, default) - [`render_page`] produces a
//!   complete HTML document for a listing fetched ahead of time.
//! - **Browser** (`csr` feature) - the `site/` app mounts
//!   [`components::PortfolioPage`] and fetches the listing on load.
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_page::{render_page, profile::Profile, types::ListingState};
//!
//! // Render before (or without) the listing arriving
//! let html = render_page(&Profile::default(), ListingState::Loading);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Featured Projects"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - repository records, the sorted listing, fetch state
//! - [`repos`] - GitHub client, recency sort, one-shot result slot
//! - [`form`] - contact form state and reducer
//! - [`profile`] - page owner's identity and links, TOML-overridable
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod form;
pub mod profile;
pub mod repos;
pub mod styles;
pub mod types;

#[cfg(feature = "ssr")]
use components::PortfolioDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the whole page as a static HTML document.
///
/// The listing is rendered as-is: `Loading` gives an empty project grid,
/// `Failed` an empty grid with a muted note. The contact form renders empty.
///
/// # Example
///
/// ```rust
/// use portfolio_page::{render_page, profile::Profile, repos::sort_by_recency, types::*};
///
/// let listing = sort_by_recency(vec![RepoRecord {
///     name: "my-cool-repo".into(),
///     html_url: "https://github.com/someone/my-cool-repo".into(),
///     ..Default::default()
/// }]);
///
/// let html = render_page(&Profile::default(), ListingState::Loaded(listing));
/// assert!(html.contains("my cool repo"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(profile: &profile::Profile, listing: types::ListingState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <PortfolioDocument profile=profile.clone() listing=listing /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::components::{CONTACT_INACTIVE, PROJECTS_UNAVAILABLE};
    use crate::profile::Profile;
    use crate::repos::{FetchError, sort_by_recency};
    use crate::types::{ListingState, NO_DESCRIPTION, RepoRecord};
    use chrono::{TimeZone, Utc};

    fn repo(name: &str, description: Option<&str>, day: u32) -> RepoRecord {
        RepoRecord {
            name: name.into(),
            description: description.map(Into::into),
            html_url: format!("https://github.com/someone/{name}"),
            updated_at: Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).single(),
        }
    }

    fn opening_tag<'a>(html: &'a str, name: &str) -> &'a str {
        let start = html.find(&format!("<{name}")).expect("tag present");
        let end = html[start..].find('>').expect("tag closed");
        &html[start..=start + end]
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"project-card\"").count()
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page(&Profile::default(), ListingState::Loading);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Tannu Kaushik"));
        assert!(html.contains("About Me"));
        assert!(html.contains("LeetCode Activity"));
        assert!(html.contains("Contact Me"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn cards_follow_recency_order() {
        let listing = sort_by_recency(vec![
            repo("oldest-thing", Some("first commit"), 1),
            repo("latest-thing", None, 28),
            repo("middle-thing", Some("halfway"), 14),
        ]);
        let html = render_page(&Profile::default(), ListingState::Loaded(listing));

        let latest = html.find("latest thing").expect("latest rendered");
        let middle = html.find("middle thing").expect("middle rendered");
        let oldest = html.find("oldest thing").expect("oldest rendered");
        assert!(latest < middle && middle < oldest);
        assert_eq!(card_count(&html), 3);
    }

    #[test]
    fn card_shows_placeholder_and_spaced_title() {
        let listing = sort_by_recency(vec![repo("my-cool-repo", None, 3)]);
        let html = render_page(&Profile::default(), ListingState::Loaded(listing));

        assert!(html.contains("my cool repo"));
        assert!(html.contains(NO_DESCRIPTION));
        assert!(html.contains("https://github.com/someone/my-cool-repo"));
    }

    #[test]
    fn pending_listing_renders_no_cards_and_no_note() {
        let html = render_page(&Profile::default(), ListingState::Loading);

        assert!(html.contains("Featured Projects"));
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains(PROJECTS_UNAVAILABLE));
    }

    #[test]
    fn failed_listing_renders_muted_note() {
        let state = ListingState::Failed(FetchError::Transport("offline".into()));
        let html = render_page(&Profile::default(), state);

        assert_eq!(card_count(&html), 0);
        assert!(html.contains(PROJECTS_UNAVAILABLE));
        assert!(!html.contains("offline"));
    }

    #[test]
    fn renders_profile_links_and_activity_image() {
        let profile = Profile {
            display_name: "Ada Lovelace".into(),
            github_account: "ada".into(),
            leetcode_handle: "ada_l".into(),
            ..Default::default()
        };
        let html = render_page(&profile, ListingState::Loading);

        assert!(html.contains("Ada Lovelace | Portfolio"));
        assert!(html.contains("https://github.com/ada"));
        assert!(html.contains("https://leetcard.jacoblin.cool/ada_l?theme=dark"));
        assert!(html.contains("mailto:"));
    }

    #[test]
    fn contact_form_renders_required_fields() {
        let html = render_page(&Profile::default(), ListingState::Loading);

        assert!(html.contains("name=\"name\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("<textarea"));
        assert!(html.contains("Your Message"));
        assert!(html.contains("required"));
        assert!(html.contains("Send Message"));
    }

    #[test]
    fn exported_contact_form_cannot_submit() {
        let html = render_page(&Profile::default(), ListingState::Loading);

        let form = opening_tag(&html, "form");
        assert!(form.contains("method=\"dialog\""), "{form}");
        assert!(!form.contains("action="), "{form}");
        assert!(opening_tag(&html, "fieldset").contains("disabled"));
        assert!(html.contains(CONTACT_INACTIVE));
        assert!(html.contains("form-action"));
        assert!(!html.contains("<script"));
    }
}
