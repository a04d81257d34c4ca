//! About-me section

use leptos::prelude::*;

/// Fixed biography paragraph.
#[component]
pub fn About(bio: String) -> impl IntoView {
    view! {
        <section id="about" class="section reveal">
            <h2 class="section-title">"About Me"</h2>
            <p class="section-text">{bio}</p>
        </section>
    }
}
