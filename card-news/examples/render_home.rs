//! Render the built-in home page to a file.
//!
//! Run with: `cargo run --example render_home`

use card_news::{RenderOptions, render_document, types::temp_news};

fn main() {
    let html = render_document(&temp_news(), &RenderOptions::default());

    let output_path = "card_news.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
