//! Leptos UI components for the card news page.
//!
//! Each component is a Leptos `#[component]` function rendered server-side;
//! nothing here needs a reactive runtime or hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomeDocument
//! └── HomePage
//!     ├── HomeHeader
//!     └── CardList
//!         └── NewsCard (per news item)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_document`], but
//! can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use card_news::components::HomePage;
//! use card_news::types::NewsItem;
//!
//! view! {
//!     <HomePage news=vec![NewsItem::new(1, "A", "Da", "C1")] />
//! }
//! ```

mod card;
mod document;
mod header;
mod home;

pub use card::{CardList, NewsCard};
pub use document::HomeDocument;
pub use header::{HEADER_SUBTITLE, HEADER_TITLE, HomeHeader, VIEW_POSTS_ARIA_LABEL, VIEW_POSTS_LABEL};
pub use home::HomePage;
