//! Coding-activity graph, rendered entirely by an external image service.

use leptos::prelude::*;

/// Embedded activity image keyed by the profile's LeetCode handle.
#[component]
pub fn ActivityGraph(image_url: String) -> impl IntoView {
    view! {
        <section id="activity" class="section reveal">
            <h2 class="section-title">"LeetCode Activity"</h2>
            <p class="section-text">"Tracking coding consistency and progress"</p>
            <img class="activity-graph" src=image_url alt="LeetCode Graph" loading="lazy" />
        </section>
    }
}
