//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use portfolio_page::profile::Profile;
use portfolio_page::render_page;
use portfolio_page::repos::{GithubClient, sort_by_recency, start_listing_fetch};
use portfolio_page::types::{ListingState, RepositoryListing};
use tracing::info;

use super::{RenderArgs, ReposArgs, SourceArgs};

fn load_profile(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => Ok(Profile::load_from_path(path)?),
        None => Ok(Profile::default()),
    }
}

fn client_for(source: &SourceArgs, profile: &Profile) -> Result<GithubClient> {
    GithubClient::with_base_url(&source.api_base, &profile.github_account)
        .context("failed to build HTTP client")
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// `portfolio render`: one fetch, then the whole page as HTML.
///
/// A failed fetch still produces a page, just without project cards.
pub async fn render(args: RenderArgs) -> Result<()> {
    let profile = load_profile(args.source.profile.as_deref())?;

    let listing = if args.offline {
        info!("offline render, project grid left empty");
        ListingState::Loading
    } else {
        let client = client_for(&args.source, &profile)?;
        info!(endpoint = %client.endpoint(), "fetching repository listing");
        let (task, pending) = start_listing_fetch(client);
        tokio::spawn(task);
        pending.resolve().await
    };

    if let ListingState::Loaded(repos) = &listing {
        info!(count = repos.len(), "rendering project cards");
    }

    let html = render_page(&profile, listing);

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "page written");
        }
        None => write_stdout(&html)?,
    }

    Ok(())
}

/// `portfolio repos`: the sorted listing, as text or JSON.
///
/// Unlike `render`, a failed fetch is an error here.
pub async fn repos(args: ReposArgs) -> Result<()> {
    let profile = load_profile(args.source.profile.as_deref())?;
    let client = client_for(&args.source, &profile)?;

    let records = client
        .fetch_repos()
        .await
        .with_context(|| format!("failed to fetch repositories for {}", client.account()))?;
    let listing = sort_by_recency(records);

    let output = if args.json {
        serde_json::to_string_pretty(&listing)?
    } else {
        format_listing(&listing)
    };
    write_stdout(&output)
}

fn format_listing(listing: &RepositoryListing) -> String {
    if listing.is_empty() {
        return "No repositories.".to_string();
    }

    listing
        .iter()
        .map(|repo| {
            let updated = repo
                .updated_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            format!("{}  {:<40}  {}", updated, repo.display_title(), repo.html_url)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_page::types::RepoRecord;

    #[test]
    fn formats_one_line_per_repo() {
        let listing = sort_by_recency(vec![RepoRecord {
            name: "my-cool-repo".into(),
            html_url: "https://github.com/someone/my-cool-repo".into(),
            updated_at: "2025-04-02T00:00:00Z".parse().ok(),
            ..Default::default()
        }]);

        let text = format_listing(&listing);
        assert!(text.starts_with("2025-04-02  my cool repo"));
        assert!(text.ends_with("https://github.com/someone/my-cool-repo"));
    }

    #[test]
    fn empty_listing_says_so() {
        assert_eq!(format_listing(&sort_by_recency(vec![])), "No repositories.");
    }

    #[test]
    fn undated_repo_shows_dash() {
        let listing = sort_by_recency(vec![RepoRecord {
            name: "draft".into(),
            ..Default::default()
        }]);
        assert!(format_listing(&listing).starts_with("-  draft"));
    }
}
