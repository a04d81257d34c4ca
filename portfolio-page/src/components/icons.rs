//! Inline SVG icons for the hero link row.
//!
//! Outline icons in the [Lucide](https://lucide.dev/) style: 24x24 viewBox,
//! stroked with `currentColor` so they follow the link color.

use leptos::prelude::*;

use crate::profile::LinkIcon;

/// Renders an inline stroked SVG icon from path data.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAIL size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "16")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon"
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Leading icon for a hero link.
#[component]
pub fn LinkGlyph(
    /// Which glyph to draw
    icon: LinkIcon,
) -> impl IntoView {
    match icon {
        LinkIcon::Mail => view! { <Icon path=ICON_MAIL /> }.into_any(),
        LinkIcon::Linkedin => view! { <Icon path=ICON_LINKEDIN /> }.into_any(),
        LinkIcon::Github => view! { <Icon path=ICON_GITHUB /> }.into_any(),
        LinkIcon::Download => view! { <Icon path=ICON_DOWNLOAD /> }.into_any(),
        LinkIcon::Emoji(glyph) => view! { <span aria-hidden="true">{glyph}</span> }.into_any(),
    }
}

/// Envelope
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 7l-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7";

/// LinkedIn logo
pub const ICON_LINKEDIN: &str = "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z M4 2a2 2 0 1 1 0 4a2 2 0 1 1 0-4z";

/// GitHub octocat outline
pub const ICON_GITHUB: &str = "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4 M9 18c-4.51 2-5-2-7-2";

/// Download arrow into a tray
pub const ICON_DOWNLOAD: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3";
