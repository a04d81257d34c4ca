//! Page footer.

use leptos::prelude::*;

/// Copyright line at the bottom of the page
#[component]
pub fn Footer(
    /// Full copyright line
    copyright: String,
) -> impl IntoView {
    view! {
        <footer class="footer">
            {copyright}
        </footer>
    }
}
