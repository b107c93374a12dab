//! Locale negotiation from `Accept-Language`-style headers.

use crate::i18n::{Locale, LocaleRegistry};
use tracing::debug;

/// One `tag;q=weight` entry of a preference list.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
    pub tag: String,
    pub weight: f32,
}

/// Parse a weighted preference list, sorted by weight descending.
///
/// Entries without `q` weigh 1.0. Entries with a malformed weight or a
/// weight of 0 ("not acceptable") are dropped. Equal weights keep header
/// order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
    let mut ranges: Vec<LanguageRange> = header
        .split(',')
        .filter_map(|token| {
            let mut params = token.split(';');
            let tag = params.next()?.trim();
            if tag.is_empty() {
                return None;
            }

            let mut weight = 1.0_f32;
            for param in params {
                if let Some(value) = param.trim().strip_prefix("q=") {
                    match value.trim().parse::<f32>() {
                        Ok(q) if (0.0..=1.0).contains(&q) => weight = q,
                        _ => {
                            debug!("Skipping language range '{}' with invalid weight", tag);
                            return None;
                        }
                    }
                }
            }

            (weight > 0.0).then(|| LanguageRange {
                tag: tag.to_string(),
                weight,
            })
        })
        .collect();

    ranges.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    ranges
}

/// Pick the best supported locale for a header.
///
/// # Returns
/// The highest-weighted tag that is an exact registry key, or `default`.
pub fn negotiate<'a>(header: &str, registry: &'a LocaleRegistry, default: &'a Locale) -> &'a Locale {
    parse_accept_language(header)
        .iter()
        .find_map(|range| registry.find(&range.tag))
        .unwrap_or(default)
}
