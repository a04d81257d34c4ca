//! Static page generation from a hand-made listing.
//!
//! Run with: `cargo run --example static_page`

use portfolio_page::profile::Profile;
use portfolio_page::render_page;
use portfolio_page::repos::sort_by_recency;
use portfolio_page::types::{ListingState, RepoRecord};

fn main() {
    // Two repositories, deliberately out of order
    let listing = sort_by_recency(vec![
        RepoRecord {
            name: "movie-recommender".into(),
            description: Some("Collaborative filtering on MovieLens".into()),
            html_url: "https://github.com/TannuKaushik1/movie-recommender".into(),
            updated_at: "2024-11-02T10:00:00Z".parse().ok(),
        },
        RepoRecord {
            name: "brain-tumor-detection".into(),
            description: None,
            html_url: "https://github.com/TannuKaushik1/brain-tumor-detection".into(),
            updated_at: "2025-04-18T16:30:00Z".parse().ok(),
        },
    ]);

    let html = render_page(&Profile::default(), ListingState::Loaded(listing));

    let output_path = "portfolio.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
