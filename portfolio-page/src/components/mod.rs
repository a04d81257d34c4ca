//! Leptos UI components for the portfolio page.
//!
//! Each section is a `#[component]` function. The same tree renders
//! server-side into a static document and client-side in the browser build.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (static export only)
//! └── PortfolioPage
//!     ├── Hero
//!     │   └── HeroLink (per profile link)
//!     ├── About
//!     ├── Projects
//!     │   └── ProjectCard (per repository)
//!     ├── ActivityGraph
//!     ├── Contact
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_page::components::PortfolioPage;
//!
//! view! {
//!     <PortfolioPage profile=profile listing=listing form=form on_acknowledge=ack />
//! }
//! ```

mod about;
mod activity;
mod contact;
mod document;
mod footer;
mod hero;
mod icons;
mod page;
mod projects;

pub use about::About;
pub use activity::ActivityGraph;
pub use contact::{CONTACT_INACTIVE, Contact};
pub use document::PortfolioDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use page::PortfolioPage;
pub use projects::{PROJECTS_UNAVAILABLE, ProjectCard, Projects};
