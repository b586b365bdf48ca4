//! Style classes for the home page.
//!
//! [`HomeStyles`] is the Rust side of a CSS module: one class name per
//! CSS-module key (`container`, `header`, `title`, `viewPosts`,
//! `cardContainer`, `card`, `category`). The built-in names are
//! `Home_<key>` and match [`HOME_CSS`].
//!
//! # Customization
//!
//! When the stylesheet is produced elsewhere (e.g. a bundler that hashes
//! class names), override the names by key:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use card_news::styles::HomeStyles;
//!
//! let overrides = BTreeMap::from([("card".to_string(), "Home_card__a1b2".to_string())]);
//! let styles = HomeStyles::default().with_overrides(&overrides);
//! assert_eq!(styles.class("card"), Some("Home_card__a1b2"));
//! assert_eq!(styles.class("title"), Some("Home_title"));
//! ```

use std::collections::BTreeMap;

use tracing::warn;

/// CSS-module keys, in markup order.
pub const STYLE_KEYS: [&str; 7] = [
    "container",
    "header",
    "title",
    "viewPosts",
    "cardContainer",
    "card",
    "category",
];

/// Class-name map for the home page, keyed by CSS-module key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeStyles {
    /// Root wrapper (`container`)
    pub container: String,
    /// Header block with the background image (`header`)
    pub header: String,
    /// Header `<h1>` (`title`)
    pub title: String,
    /// Call-to-action button (`viewPosts`)
    pub view_posts: String,
    /// Card section wrapper (`cardContainer`)
    pub card_container: String,
    /// One card (`card`)
    pub card: String,
    /// Category label inside a card (`category`)
    pub category: String,
}

impl Default for HomeStyles {
    fn default() -> Self {
        Self {
            container: "Home_container".into(),
            header: "Home_header".into(),
            title: "Home_title".into(),
            view_posts: "Home_viewPosts".into(),
            card_container: "Home_cardContainer".into(),
            card: "Home_card".into(),
            category: "Home_category".into(),
        }
    }
}

impl HomeStyles {
    /// Class name for a CSS-module key, `None` for unknown keys.
    pub fn class(&self, key: &str) -> Option<&str> {
        self.slot(key).map(String::as_str)
    }

    /// Replace class names by CSS-module key. Unknown keys are skipped.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, class) in overrides {
            match self.slot_mut(key) {
                Some(slot) => *slot = class.clone(),
                None => warn!(key = %key, "ignoring style override for unknown class key"),
            }
        }
        self
    }

    fn slot(&self, key: &str) -> Option<&String> {
        match key {
            "container" => Some(&self.container),
            "header" => Some(&self.header),
            "title" => Some(&self.title),
            "viewPosts" => Some(&self.view_posts),
            "cardContainer" => Some(&self.card_container),
            "card" => Some(&self.card),
            "category" => Some(&self.category),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "container" => Some(&mut self.container),
            "header" => Some(&mut self.header),
            "title" => Some(&mut self.title),
            "viewPosts" => Some(&mut self.view_posts),
            "cardContainer" => Some(&mut self.card_container),
            "card" => Some(&mut self.card),
            "category" => Some(&mut self.category),
            _ => None,
        }
    }
}

/// Header background image, referenced by URL only.
pub const HEADER_BACKGROUND_URL: &str =
    "https://cdn.pixabay.com/photo/2022/06/30/02/00/mountains-7292778_1280.jpg";

/// Inline style for the header block.
pub fn header_style() -> String {
    format!("background-image: url('{}')", HEADER_BACKGROUND_URL)
}

/// Stylesheet for the built-in class names.
pub const HOME_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: 'Pretendard', 'Noto Sans KR', system-ui, sans-serif;
    background: #f5f5f2;
    color: #222;
}

.Home_container {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.Home_header {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
    min-height: 420px;
    padding: 48px 24px;
    background-size: cover;
    background-position: center;
    color: #fff;
    text-align: center;
    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.45);
}

.Home_header p {
    margin: 0;
    max-width: 560px;
    font-size: 1.1rem;
    line-height: 1.6;
}

.Home_title {
    margin: 0;
    font-size: 3rem;
    letter-spacing: 0.04em;
}

.Home_viewPosts {
    padding: 12px 28px;
    border: 2px solid #fff;
    border-radius: 999px;
    background: transparent;
    color: #fff;
    font-size: 1rem;
    cursor: pointer;
}

.Home_viewPosts:hover {
    background: rgba(255, 255, 255, 0.15);
}

.Home_cardContainer {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 24px;
    max-width: 1100px;
    width: 100%;
    margin: 0 auto;
    padding: 48px 24px;
}

.Home_card {
    padding: 24px;
    border-radius: 12px;
    background: #fff;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}

.Home_card h2 {
    margin: 8px 0;
    font-size: 1.25rem;
}

.Home_card p {
    margin: 0;
    color: #555;
    line-height: 1.5;
}

.Home_category {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 999px;
    background: #1f6f5c;
    color: #fff;
    font-size: 0.8rem;
}
"#;
