//! Page header - title, subtitle and the call-to-action button over the
//! background image.

use leptos::prelude::*;

use crate::styles::{HomeStyles, header_style};

/// Header `<h1>` text.
pub const HEADER_TITLE: &str = "카드 뉴스";

/// Paragraph under the title.
pub const HEADER_SUBTITLE: &str = "우리는 이야기를 찾기 위해 세상을 여행합니다. 함께 가요!";

/// Visible button text.
pub const VIEW_POSTS_LABEL: &str = "최신 게시물 보기";

/// Accessible name of the button.
pub const VIEW_POSTS_ARIA_LABEL: &str = "view latest posts";

/// Header block. The button has no behavior attached.
#[component]
pub fn HomeHeader(styles: HomeStyles) -> impl IntoView {
    let HomeStyles {
        header,
        title,
        view_posts,
        ..
    } = styles;

    view! {
        <header class=header style=header_style()>
            <h1 class=title>{HEADER_TITLE}</h1>
            <p>{HEADER_SUBTITLE}</p>
            <button type="button" class=view_posts aria-label=VIEW_POSTS_ARIA_LABEL>
                {VIEW_POSTS_LABEL}
            </button>
        </header>
    }
}
