//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::{HEADER_TITLE, HomePage};
use crate::styles::{HOME_CSS, HomeStyles};
use crate::types::NewsItem;

/// The complete HTML document around [`HomePage`].
#[component]
pub fn HomeDocument(
    news: Vec<NewsItem>,
    #[prop(optional)]
    styles: HomeStyles,
    /// Inline [`HOME_CSS`] in `<head>`
    #[prop(default = true)]
    inline_css: bool,
) -> impl IntoView {
    view! {
        <html lang="ko">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{HEADER_TITLE}</title>
                {inline_css.then(|| view! { <style>{HOME_CSS}</style> })}
            </head>
            <body>
                <HomePage news=news styles=styles />
            </body>
        </html>
    }
}
