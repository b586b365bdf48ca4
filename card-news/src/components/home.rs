//! Home page - header plus the card list.

use leptos::prelude::*;

use super::{CardList, HomeHeader};
use crate::styles::HomeStyles;
use crate::types::{NewsItem, temp_news};

/// The card news home page.
///
/// Without props it renders the built-in dataset with the built-in classes.
#[component]
pub fn HomePage(
    /// Items to render, in order
    #[prop(default = temp_news())]
    news: Vec<NewsItem>,
    /// Class-name map
    #[prop(optional)]
    styles: HomeStyles,
) -> impl IntoView {
    let container = styles.container.clone();

    view! {
        <div class=container>
            <HomeHeader styles=styles.clone() />
            <CardList news=news styles=styles />
        </div>
    }
}
