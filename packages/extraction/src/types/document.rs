//! Parsed profile page with the accessors the heuristics need.
//!
//! `scraper::Html` is not `Send`, so a `ProfileDocument` must be built and
//! consumed without crossing an `.await`.

use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::debug;

/// Elements whose text is never part of the rendered body text.
const NON_RENDERED: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that break the line in rendered text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// A parsed HTML document.
pub struct ProfileDocument {
    html: Html,
}

impl ProfileDocument {
    /// Parse an HTML string. Never fails: malformed markup is repaired the
    /// way a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Content of the page description meta tag.
    ///
    /// Prefers `og:description` (where profile bios usually land) and falls
    /// back to `<meta name="description">`.
    pub fn meta_description(&self) -> Option<String> {
        ["meta[property=\"og:description\"]", "meta[name=\"description\"]"]
            .iter()
            .find_map(|selector| self.attr(selector, "content"))
    }

    /// First value of `attr` on elements matching `selector`.
    pub fn attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.html
            .select(&selector)
            .find_map(|el| el.value().attr(attr))
            .map(str::to_string)
    }

    /// Concatenated text of every element matching `selector`, in document
    /// order. Invalid selectors match nothing.
    pub fn select_texts(&self, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    /// Every `application/ld+json` block that parses as JSON.
    ///
    /// Malformed blocks are skipped; they are common on real pages.
    pub fn structured_data(&self) -> Vec<Value> {
        let Ok(selector) = Selector::parse("script[type=\"application/ld+json\"]") else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .filter_map(|el| {
                let raw = el.text().collect::<String>();
                let parsed = parse_block(&raw);
                if parsed.is_none() {
                    debug!(bytes = raw.len(), "Skipping malformed structured-data block");
                }
                parsed
            })
            .collect()
    }

    /// Rendered text of `<body>`: inline markup is flattened, block
    /// elements are separated by line breaks.
    pub fn body_text(&self) -> String {
        let Ok(selector) = Selector::parse("body") else {
            return String::new();
        };
        match self.html.select(&selector).next() {
            Some(body) => rendered_text(body),
            None => String::new(),
        }
    }
}

fn parse_block(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw).ok()
}

fn rendered_text(root: ElementRef<'_>) -> String {
    let mut text = String::new();
    push_rendered(root, &mut text);
    text
}

/// Append the text under `element`. Inline text is joined as-is; block
/// elements start and end on their own line.
fn push_rendered(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if NON_RENDERED.contains(&name) {
            continue;
        }
        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push('\n');
        }
        push_rendered(child, out);
        if block {
            out.push('\n');
        }
    }
}
