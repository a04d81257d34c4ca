//! Root document component - the complete HTML page for static export

use leptos::prelude::*;

use super::PortfolioPage;
use crate::form::ContactForm;
use crate::profile::Profile;
use crate::styles::{PAGE_CSP, PAGE_CSS};
use crate::types::ListingState;

/// The complete HTML document
///
/// No script runs in the exported page, so the contact form is rendered inert.
#[component]
pub fn PortfolioDocument(profile: Profile, listing: ListingState) -> impl IntoView {
    let title = format!("{} | Portfolio", profile.display_name);
    let listing = RwSignal::new(listing);
    let form = RwSignal::new(ContactForm::default());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=PAGE_CSP />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <PortfolioPage
                    profile=profile
                    listing=listing
                    form=form
                />
            </body>
        </html>
    }
}
