// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Structured helpers over captured message markup
//!
//! Share pages render assistant answers as rich HTML. These helpers pull the
//! common structures (code, lists, tables, headings) back out of a message's
//! `raw_html`, or flatten the whole fragment to Markdown.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use super::extractor::element_text;

/// A `<pre><code>` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Taken from a `language-*` class on the `<code>` element
    pub language: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Unordered,
    Ordered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlList {
    pub kind: ListKind,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 through 6
    pub level: u8,
    pub text: String,
}

fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => root.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Extract code blocks, in document order
pub fn extract_code_blocks(html: &str) -> Vec<CodeBlock> {
    let fragment = Html::parse_fragment(html);
    let mut blocks = Vec::new();

    for pre in select_all(fragment.root_element(), "pre") {
        let Some(code) = select_all(pre, "code").into_iter().next() else {
            continue;
        };

        let language = code.value().classes().find_map(|class| {
            class
                .strip_prefix("language-")
                .filter(|lang| !lang.is_empty())
                .map(str::to_string)
        });

        blocks.push(CodeBlock {
            language,
            content: code.text().collect(),
        });
    }

    blocks
}

/// Extract lists: all unordered lists first, then all ordered lists
pub fn extract_lists(html: &str) -> Vec<HtmlList> {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();

    [("ul", ListKind::Unordered), ("ol", ListKind::Ordered)]
        .into_iter()
        .flat_map(|(tag, kind)| {
            select_all(root, tag)
                .into_iter()
                .map(move |list| HtmlList {
                    kind,
                    items: select_all(list, "li")
                        .iter()
                        .map(element_text)
                        .collect(),
                })
        })
        .collect()
}

/// Extract tables with their `<thead>` headers and `<tbody>` rows
pub fn extract_tables(html: &str) -> Vec<Table> {
    let fragment = Html::parse_fragment(html);

    select_all(fragment.root_element(), "table")
        .into_iter()
        .map(|table| {
            let headers = select_all(table, "thead th")
                .iter()
                .map(element_text)
                .collect();
            let rows = select_all(table, "tbody tr")
                .into_iter()
                .map(|row| {
                    select_all(row, "td")
                        .iter()
                        .map(element_text)
                        .collect::<Vec<_>>()
                })
                .collect();
            Table { headers, rows }
        })
        .collect()
}

/// Extract headings grouped by level (all `h1`, then all `h2`, ...)
pub fn extract_headings(html: &str) -> Vec<Heading> {
    let fragment = Html::parse_fragment(html);
    let root = fragment.root_element();
    let mut headings = Vec::new();

    for level in 1..=6u8 {
        for heading in select_all(root, &format!("h{}", level)) {
            headings.push(Heading {
                level,
                text: element_text(&heading),
            });
        }
    }

    headings
}

/// Convert an HTML fragment to Markdown, collapsing runs of blank lines
pub fn html_to_markdown(html: &str) -> String {
    let markdown = html2md::parse_html(html);

    let collapsed = match Regex::new(r"\n{3,}") {
        Ok(blank_runs) => blank_runs.replace_all(&markdown, "\n\n").into_owned(),
        Err(_) => markdown,
    };

    collapsed.trim().to_string()
}
