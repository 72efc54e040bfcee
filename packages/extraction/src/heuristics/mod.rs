//! Location heuristics.
//!
//! Each platform has an ordered chain of extractors. Every extractor looks at
//! one part of the page (bio meta tag, structured data, visible text) and
//! returns a candidate. The first non-blank candidate wins and the remaining
//! extractors are never run.

mod facebook;
mod instagram;
mod structured_data;

use tracing::debug;

use crate::types::document::ProfileDocument;
use crate::types::platform::Platform;

/// A single extraction attempt.
pub type ExtractFn = fn(&ProfileDocument) -> Option<String>;

/// A named step in a heuristic chain.
#[derive(Clone, Copy)]
pub struct Extractor {
    /// Short name for logs
    pub name: &'static str,
    pub run: ExtractFn,
}

/// Ordered extractor chain for one platform.
#[derive(Clone, Copy)]
pub struct LocationExtractor {
    platform: Platform,
    chain: &'static [Extractor],
}

impl LocationExtractor {
    /// Chain for `platform`.
    pub fn for_platform(platform: Platform) -> Self {
        let chain = match platform {
            Platform::Instagram => instagram::CHAIN,
            Platform::Facebook => facebook::CHAIN,
        };
        Self { platform, chain }
    }

    /// Names of the steps in evaluation order.
    pub fn steps(&self) -> impl Iterator<Item = &'static str> {
        self.chain.iter().map(|step| step.name)
    }

    /// Run the chain; first non-blank match wins.
    pub fn extract(&self, doc: &ProfileDocument) -> Option<String> {
        self.chain.iter().find_map(|step| {
            let location = (step.run)(doc).and_then(clean)?;
            debug!(
                platform = %self.platform,
                step = step.name,
                location = %location,
                "Location matched"
            );
            Some(location)
        })
    }
}

/// Parse `html` and run the chain for `platform`.
///
/// `None` platform (an unsupported tag) never matches.
pub fn extract_location(platform: Option<Platform>, html: &str) -> Option<String> {
    let platform = platform?;
    let doc = ProfileDocument::parse(html);
    LocationExtractor::for_platform(platform).extract(&doc)
}

/// Trim a candidate and drop it if nothing is left.
fn clean(candidate: String) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
