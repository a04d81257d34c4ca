//! Page data types: repository records, the sorted listing, and the
//! acknowledgment shown after a contact-form submission.
//!
//! Records are decoded straight from the GitHub "list repositories for a
//! user" response. Decoding is lenient: a record with a `null` name, a
//! non-string description or an unparsable timestamp still renders a card.
//!
//! # Example
//!
//! ```rust
//! use portfolio_page::types::RepoRecord;
//!
//! let repo = RepoRecord {
//!     name: "my-cool-repo".into(),
//!     ..Default::default()
//! };
//!
//! assert_eq!(repo.display_title(), "my cool repo");
//! assert_eq!(repo.display_description(), "No description provided.");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::repos::FetchError;

/// Card body used when a repository has no description.
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Text shown to the visitor after the contact form is submitted.
pub const ACKNOWLEDGMENT_TEXT: &str = "Message sent! (This is a demo form)";

/// A single project entry returned by the repository listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Repository name, e.g. `my-cool-repo`
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    /// Free-text description; GitHub sends `null` when none is set
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub description: Option<String>,
    /// Browser URL of the repository
    #[serde(default, deserialize_with = "lenient_string")]
    pub html_url: String,
    /// Last update time; absent when missing or not RFC 3339
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepoRecord {
    /// Card title: the name with every `-` replaced by a space.
    pub fn display_title(&self) -> String {
        self.name.replace('-', " ")
    }

    /// Card body: the description, or [`NO_DESCRIPTION`] when it is absent or empty.
    pub fn display_description(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_DESCRIPTION,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_str).map(str::to_owned))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
        .map(|stamp| stamp.with_timezone(&Utc)))
}

/// Repository records ordered most recently updated first.
///
/// Only [`crate::repos::sort_by_recency`] builds a listing, so the order
/// invariant holds for every value of this type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositoryListing(pub(crate) Vec<RepoRecord>);

impl RepositoryListing {
    /// Records in display order.
    pub fn records(&self) -> &[RepoRecord] {
        &self.0
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, RepoRecord> {
        self.0.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the account has no repositories.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for RepositoryListing {
    type Item = RepoRecord;
    type IntoIter = std::vec::IntoIter<RepoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RepositoryListing {
    type Item = &'a RepoRecord;
    type IntoIter = std::slice::Iter<'a, RepoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Where the page-load fetch currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    /// Request outstanding, or it never resolved
    #[default]
    Loading,
    /// Sorted records ready to render
    Loaded(RepositoryListing),
    /// The request failed; the projects section stays empty
    Failed(FetchError),
}

impl ListingState {
    /// Records to render as cards. Empty unless the fetch succeeded.
    pub fn records(&self) -> &[RepoRecord] {
        match self {
            ListingState::Loaded(listing) => listing.records(),
            ListingState::Loading | ListingState::Failed(_) => &[],
        }
    }

    /// True when the fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, ListingState::Failed(_))
    }
}

/// Confirmation shown after the contact form is submitted.
///
/// Carries no delivery guarantee: nothing is sent anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Acknowledgment;

impl Acknowledgment {
    /// The fixed confirmation text.
    pub fn message(&self) -> &'static str {
        ACKNOWLEDGMENT_TEXT
    }
}
