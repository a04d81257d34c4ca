//! Hero banner: avatar, name, headline and the link row.

use leptos::prelude::*;

use super::LinkGlyph;
use crate::profile::{Profile, ProfileLink};

/// Full-height opening section.
#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let links = profile.links();

    view! {
        <section class="hero reveal">
            <img
                class="hero-avatar"
                src=profile.avatar_path.clone()
                alt=profile.display_name.clone()
            />
            <h1 class="hero-name">{profile.display_name.clone()}</h1>
            <p class="hero-tagline">{profile.tagline.clone()}</p>
            <p class="hero-focus">{profile.focus.clone()}</p>
            <nav class="hero-links">
                {links.into_iter().map(|link| view! { <HeroLink link=link /> }).collect::<Vec<_>>()}
            </nav>
        </section>
    }
}

#[component]
fn HeroLink(link: ProfileLink) -> impl IntoView {
    // mailto: stays in the current tab
    let target = link.new_tab.then_some("_blank");
    let rel = link.new_tab.then_some("noopener noreferrer");

    view! {
        <a class="hero-link" href=link.href target=target rel=rel>
            <LinkGlyph icon=link.icon />
            {link.label}
        </a>
    }
}
