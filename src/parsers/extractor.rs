// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text helpers shared by the share-page parsers

use scraper::{ElementRef, Html, Selector};

/// Parse a CSS selector, `None` if it is malformed
pub(crate) fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Concatenated text of an element, trimmed
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `css`, or `None` when the
/// element is missing or has no text.
pub fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css)?;

    document
        .select(&selector)
        .next()
        .map(|el| element_text(&el))
        .filter(|text| !text.is_empty())
}

/// Shorten `text` to `max_chars` characters, appending "..." when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
