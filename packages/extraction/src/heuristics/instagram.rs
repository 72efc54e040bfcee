//! Instagram chain: bio marker, `ProfilePage` structured data, visible text.

use lazy_static::lazy_static;
use regex::Regex;

use super::structured_data::{has_type, nodes, place_name};
use super::Extractor;
use crate::types::document::ProfileDocument;

lazy_static! {
    // "📍 Paris, France" up to the next pin or line break
    static ref PIN_REGEX: Regex = Regex::new(r"📍\s*([^📍\n]+)").unwrap();

    static ref LOCATED_IN_REGEX: Regex = Regex::new(r"(?i)located in ([^,.]+)").unwrap();

    // "Location: X", "location X"
    static ref LOCATION_LABEL_REGEX: Regex =
        Regex::new(r"(?i)\blocation[:\s]*([^\n,.]+)").unwrap();
}

pub(super) const CHAIN: &[Extractor] = &[
    Extractor {
        name: "bio_marker",
        run: bio_marker,
    },
    Extractor {
        name: "structured_data",
        run: profile_page,
    },
    Extractor {
        name: "body_text",
        run: location_label,
    },
];

fn bio_marker(doc: &ProfileDocument) -> Option<String> {
    let bio = doc.meta_description()?;
    capture(&PIN_REGEX, &bio).or_else(|| capture(&LOCATED_IN_REGEX, &bio))
}

fn profile_page(doc: &ProfileDocument) -> Option<String> {
    doc.structured_data().iter().find_map(|block| {
        nodes(block)
            .into_iter()
            .filter(|node| has_type(node, "ProfilePage"))
            .find_map(|node| node.get("location").and_then(place_name))
    })
}

fn location_label(doc: &ProfileDocument) -> Option<String> {
    capture(&LOCATION_LABEL_REGEX, &doc.body_text())
}

/// First capture group, trimmed, if non-blank.
fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    let found = regex.captures(haystack)?.get(1)?.as_str().trim();
    if found.is_empty() {
        None
    } else {
        Some(found.to_string())
    }
}
