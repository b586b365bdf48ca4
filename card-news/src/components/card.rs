//! News cards.

use leptos::prelude::*;

use crate::styles::HomeStyles;
use crate::types::NewsItem;

/// One card: category label, headline, description.
///
/// The item id is emitted as `data-key` and is never visible text.
#[component]
pub fn NewsCard(item: NewsItem, styles: HomeStyles) -> impl IntoView {
    let HomeStyles { card, category, .. } = styles;

    view! {
        <div class=card data-key=item.id.to_string()>
            <div class=category>{item.category}</div>
            <h2>{item.title}</h2>
            <p>{item.description}</p>
        </div>
    }
}

/// Card section, one [`NewsCard`] per item in dataset order.
///
/// Leptos closes the collected list with a `<!>` placeholder comment, so an
/// empty dataset renders as `<div class="…"><!></div>`.
#[component]
pub fn CardList(news: Vec<NewsItem>, styles: HomeStyles) -> impl IntoView {
    let card_container = styles.card_container.clone();

    view! {
        <div class=card_container>
            {news
                .into_iter()
                .map(|item| view! { <NewsCard item=item styles=styles.clone() /> })
                .collect::<Vec<_>>()}
        </div>
    }
}
