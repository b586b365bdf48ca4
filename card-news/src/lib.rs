//! # card-news
//!
//! Leptos SSR renderer for the card news home page.
//!
//! The page is a header (title, subtitle, call-to-action button over a
//! background image) followed by one card per news item. Rendering is pure:
//! the same items always produce the same markup.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_news::{render_document, RenderOptions, types::temp_news};
//!
//! let html = render_document(&temp_news(), &RenderOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("첫 번째 카드 뉴스"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - `NewsItem`, the built-in dataset and JSON loading
//! - [`components`] - Leptos UI components
//! - [`styles`] - class-name map and stylesheet
//! - [`config`] - optional `card-news.toml`
//! - [`error`] - error type for loading and writing
//!
//! No reactive runtime or hydration is needed - pure static HTML generation
//! through Leptos 0.8's `RenderHtml::to_html`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod error;
pub mod styles;
pub mod types;

use components::{HomeDocument, HomePage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use styles::HomeStyles;
use types::NewsItem;

pub use error::{CardNewsError, Result};

/// Rendering knobs shared by the fragment and document renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class-name map
    pub styles: HomeStyles,
    /// Inline the stylesheet into `<head>` (document render only)
    pub inline_css: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styles: HomeStyles::default(),
            inline_css: true,
        }
    }
}

/// Render the [`HomePage`] fragment with the built-in classes.
///
/// # Example
///
/// ```rust
/// use card_news::{render_home_page, types::NewsItem};
///
/// let html = render_home_page(&[NewsItem::new(1, "A", "Da", "C1")]);
/// assert!(html.contains("Da"));
/// assert!(!html.contains("<html"));
/// ```
pub fn render_home_page(news: &[NewsItem]) -> String {
    render_fragment(news, &RenderOptions::default())
}

/// Render the [`HomePage`] fragment with the given options.
pub fn render_fragment(news: &[NewsItem], options: &RenderOptions) -> String {
    let page = view! {
        <HomePage news=news.to_vec() styles=options.styles.clone() />
    };

    page.to_html()
}

/// Render the complete HTML document, including `<!DOCTYPE html>`.
pub fn render_document(news: &[NewsItem], options: &RenderOptions) -> String {
    let doc = view! {
        <HomeDocument
            news=news.to_vec()
            styles=options.styles.clone()
            inline_css=options.inline_css
        />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
