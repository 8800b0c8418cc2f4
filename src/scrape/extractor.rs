use scraper::{Html, Selector};

use super::ExtractionRule;
use crate::error::ExtractError;

/// Locate and parse a price inside fetched page content. Pure; no I/O.
///
/// Takes the first element matched by the rule's selector, strips grouping
/// separators from its text, and parses it as a float. A parse that yields a
/// non-finite value is rejected rather than passed through as a numeric
/// sentinel.
pub fn extract(content: &str, rule: &ExtractionRule) -> Result<f64, ExtractError> {
    let selector = Selector::parse(&rule.selector)
        .map_err(|_| ExtractError::Selector(rule.selector.clone()))?;

    let document = Html::parse_document(content);
    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| ExtractError::NotFound(rule.selector.clone()))?;

    let raw: String = element.text().collect();
    let text = raw.trim();
    if text.is_empty() {
        return Err(ExtractError::NotFound(rule.selector.clone()));
    }

    let price = text
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| ExtractError::NotNumeric(text.to_string()))?;
    if !price.is_finite() {
        return Err(ExtractError::NotNumeric(text.to_string()));
    }
    Ok(price)
}
