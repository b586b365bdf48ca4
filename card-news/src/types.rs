//! News data types and the built-in placeholder dataset.
//!
//! A dataset is an ordered `Vec<NewsItem>`. Order is render order; `id` is
//! only a render key and must be unique within one dataset.
//!
//! # Example
//!
//! ```rust
//! use card_news::types::{NewsItem, temp_news};
//!
//! let item = NewsItem::new(7, "Title", "Body", "Travel");
//! assert_eq!(item.category, "Travel");
//! assert_eq!(temp_news().len(), 2);
//! ```

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CardNewsError, Result};

/// One card news record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Render key, unique within a dataset
    pub id: i64,
    /// Card headline
    pub title: String,
    /// Short body text under the headline
    pub description: String,
    /// Category label shown above the headline
    pub category: String,
}

impl NewsItem {
    /// Build an item from borrowed strings.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Placeholder records: (id, title, description, category).
const TEMP_NEWS_RECORDS: [(i64, &str, &str, &str); 2] = [
    (
        1,
        "첫 번째 카드 뉴스",
        "첫 번째 카드 뉴스의 설명입니다.",
        "사진",
    ),
    (
        2,
        "두 번째 카드 뉴스",
        "두 번째 카드 뉴스의 설명입니다.",
        "모험",
    ),
];

/// Built-in dataset, created once on first access and never mutated.
pub static TEMP_NEWS: Lazy<Vec<NewsItem>> = Lazy::new(|| {
    TEMP_NEWS_RECORDS
        .iter()
        .map(|&(id, title, description, category)| NewsItem::new(id, title, description, category))
        .collect()
});

/// Owned copy of the built-in dataset.
pub fn temp_news() -> Vec<NewsItem> {
    TEMP_NEWS.to_vec()
}

/// Check that every id occurs at most once.
pub fn validate_news(news: &[NewsItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(news.len());
    for item in news {
        if !seen.insert(item.id) {
            return Err(CardNewsError::DuplicateId(item.id));
        }
    }
    Ok(())
}

/// Parse a JSON array of news items and validate it.
pub fn parse_news(json: &str, origin: &Path) -> Result<Vec<NewsItem>> {
    let news: Vec<NewsItem> =
        serde_json::from_str(json).map_err(|source| CardNewsError::Json {
            path: origin.to_path_buf(),
            source,
        })?;
    validate_news(&news)?;
    Ok(news)
}

/// Load a dataset from a JSON file.
pub fn load_news(path: &Path) -> Result<Vec<NewsItem>> {
    let content = std::fs::read_to_string(path).map_err(|source| CardNewsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let news = parse_news(&content, path)?;
    debug!(path = %path.display(), items = news.len(), "loaded news dataset");
    Ok(news)
}
