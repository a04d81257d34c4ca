//! Profile configuration: who the page is about.
//!
//! Everything the page hardcodes about its owner (names, links, handles, the
//! biography) lives here. [`Profile::default`] reproduces the published page;
//! a TOML file can override any subset of fields:
//!
//! ```toml
//! display_name = "Ada Lovelace"
//! github_account = "ada"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Activity-graph image service.
pub const ACTIVITY_GRAPH_BASE: &str = "https://leetcard.jacoblin.cool";

/// Failure loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The file could not be read
    #[error("failed to read profile {}: {source}", path.display())]
    Read {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid profile TOML
    #[error("failed to parse profile {}: {source}", path.display())]
    Parse {
        /// Offending path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// Identity and links shown on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name in the hero and footer
    pub display_name: String,
    /// Headline under the name
    pub tagline: String,
    /// Short line of focus areas
    pub focus: String,
    /// Contact address for the mail link
    pub email: String,
    /// LinkedIn profile URL
    pub linkedin_url: String,
    /// GitHub account whose repositories are listed
    pub github_account: String,
    /// LeetCode handle, also keys the activity graph
    pub leetcode_handle: String,
    /// Static resume asset
    pub resume_path: String,
    /// Static avatar asset
    pub avatar_path: String,
    /// About-me paragraph
    pub bio: String,
    /// Year in the footer copyright line
    pub copyright_year: u16,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "Tannu Kaushik".into(),
            tagline: "AI & ML Engineering Student".into(),
            focus: "Deep Learning | Data Science | Web Dev".into(),
            email: "tannukaushik1503@gmail.com".into(),
            linkedin_url: "https://www.linkedin.com/in/tannu-kaushik-539a16264/".into(),
            github_account: "TannuKaushik1".into(),
            leetcode_handle: "Tannu_Kaushik".into(),
            resume_path: "/resume-tannu-kaushik.pdf".into(),
            avatar_path: "/profile/image.jpg".into(),
            bio: "I'm a B.Tech student at The NorthCap University, specializing in Artificial \
                  Intelligence. With a passion for Deep Learning and Data Science, I enjoy \
                  creating real-world solutions through innovative machine learning models and \
                  full-stack web applications. During my internships at Maruti Suzuki and \
                  Octanet, I developed solutions that improved system efficiency and enhanced \
                  customer experience. I constantly seek to grow by exploring new tech and \
                  contributing to impactful projects."
                .into(),
            copyright_year: 2025,
        }
    }
}

/// Icon shown next to a hero link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    /// Envelope
    Mail,
    /// LinkedIn logo
    Linkedin,
    /// GitHub logo
    Github,
    /// Text-only link with an emoji prefix
    Emoji(&'static str),
    /// Download arrow
    Download,
}

/// One entry in the hero link row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    /// Visible label
    pub label: &'static str,
    /// Target URL
    pub href: String,
    /// Leading icon
    pub icon: LinkIcon,
    /// Open in a new tab
    pub new_tab: bool,
}

impl Profile {
    /// Load a profile from a TOML file. Missing fields keep their defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let profile: Self = toml::from_str(&content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), account = %profile.github_account, "profile loaded");
        Ok(profile)
    }

    /// GitHub profile page.
    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_account)
    }

    /// LeetCode profile page.
    pub fn leetcode_profile_url(&self) -> String {
        format!("https://leetcode.com/u/{}/", self.leetcode_handle)
    }

    /// Externally rendered activity graph for the LeetCode handle.
    pub fn activity_graph_url(&self) -> String {
        format!(
            "{}/{}?theme=dark&font=baloo&ext=activity",
            ACTIVITY_GRAPH_BASE, self.leetcode_handle
        )
    }

    /// Footer copyright line.
    pub fn copyright(&self) -> String {
        format!(
            "\u{a9} {} {}. All rights reserved.",
            self.copyright_year, self.display_name
        )
    }

    /// Hero links in display order.
    pub fn links(&self) -> Vec<ProfileLink> {
        vec![
            ProfileLink {
                label: "Email",
                href: format!("mailto:{}", self.email),
                icon: LinkIcon::Mail,
                new_tab: false,
            },
            ProfileLink {
                label: "LinkedIn",
                href: self.linkedin_url.clone(),
                icon: LinkIcon::Linkedin,
                new_tab: true,
            },
            ProfileLink {
                label: "GitHub",
                href: self.github_profile_url(),
                icon: LinkIcon::Github,
                new_tab: true,
            },
            ProfileLink {
                label: "LeetCode",
                href: self.leetcode_profile_url(),
                icon: LinkIcon::Emoji("\u{1f9e0}"),
                new_tab: true,
            },
            ProfileLink {
                label: "Resume",
                href: self.resume_path.clone(),
                icon: LinkIcon::Download,
                new_tab: true,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn default_profile_derives_urls() {
        let profile = Profile::default();
        assert_eq!(profile.github_profile_url(), "https://github.com/TannuKaushik1");
        assert_eq!(
            profile.activity_graph_url(),
            "https://leetcard.jacoblin.cool/Tannu_Kaushik?theme=dark&font=baloo&ext=activity"
        );
        assert_eq!(
            profile.copyright(),
            "\u{a9} 2025 Tannu Kaushik. All rights reserved."
        );
    }

    #[test]
    fn links_are_ordered_and_mail_stays_in_tab() {
        let links = Profile::default().links();
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Email", "LinkedIn", "GitHub", "LeetCode", "Resume"]);
        assert_eq!(links[0].href, "mailto:tannukaushik1503@gmail.com");
        assert!(!links[0].new_tab);
        assert!(links[1..].iter().all(|l| l.new_tab));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("profile.toml");
        let mut file = std::fs::File::create(&path).expect("create profile");
        writeln!(
            file,
            r#"
display_name = "Ada Lovelace"
github_account = "ada"
copyright_year = 1843
"#
        )
        .expect("write profile");

        let profile = Profile::load_from_path(&path).expect("valid profile");
        assert_eq!(profile.display_name, "Ada Lovelace");
        assert_eq!(profile.github_account, "ada");
        assert_eq!(profile.copyright_year, 1843);
        assert_eq!(profile.tagline, Profile::default().tagline);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = Profile::load_from_path(&temp.path().join("nope.toml"))
            .expect_err("file does not exist");
        assert!(matches!(err, ProfileError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("profile.toml");
        std::fs::write(&path, "copyright_year = \"soon\"").expect("write profile");

        let err = Profile::load_from_path(&path).expect_err("wrong type");
        assert!(matches!(err, ProfileError::Parse { .. }));
    }
}
