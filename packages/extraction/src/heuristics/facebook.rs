//! Facebook chain: intro contact items, structured data, visible text.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::structured_data::{place_name, text};
use super::Extractor;
use crate::types::document::ProfileDocument;

const CONTACT_ITEM_SELECTOR: &str = ".contact-wrapper .contact-item";

lazy_static! {
    static ref CONTACT_PREFIX_REGEX: Regex = Regex::new(r"(?i)lives in|from\s*").unwrap();

    static ref LIVES_IN_REGEX: Regex =
        Regex::new(r"(?i)\b(lives in|from)\s+([^\n,.]+)").unwrap();
}

pub(super) const CHAIN: &[Extractor] = &[
    Extractor {
        name: "contact_item",
        run: contact_item,
    },
    Extractor {
        name: "structured_data",
        run: structured_location,
    },
    Extractor {
        name: "body_text",
        run: lives_in,
    },
];

fn contact_item(doc: &ProfileDocument) -> Option<String> {
    let item = doc
        .select_texts(CONTACT_ITEM_SELECTOR)
        .into_iter()
        .find(|t| t.contains("Lives in") || t.contains("From"))?;
    Some(CONTACT_PREFIX_REGEX.replacen(&item, 1, "").trim().to_string())
}

fn structured_location(doc: &ProfileDocument) -> Option<String> {
    doc.structured_data()
        .iter()
        .filter_map(|block| block.get("location"))
        .find_map(|location| match location {
            Value::String(_) => text(Some(location)),
            Value::Object(_) => place_name(location),
            _ => None,
        })
}

fn lives_in(doc: &ProfileDocument) -> Option<String> {
    let body = doc.body_text();
    let found = LIVES_IN_REGEX.captures(&body)?.get(2)?.as_str().trim();
    if found.is_empty() {
        None
    } else {
        Some(found.to_string())
    }
}
