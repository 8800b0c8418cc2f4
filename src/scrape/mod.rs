pub mod extractor;
pub mod fetcher;
pub mod job;

use serde::{Deserialize, Serialize};

use crate::types::symbol::Symbol;

/// Where and how to find one symbol's price in its upstream page.
///
/// Rules are configuration data, not code: upstream page structure changes
/// silently and independently per source, and a selector revision must not
/// require restructuring. `version` tracks that revision history in config.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExtractionRule {
    pub symbol: Symbol,
    pub url: String,
    /// CSS selector whose first match contains the price text.
    pub selector: String,
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

const PRICE_SELECTOR: &str = "[data-test=\"instrument-price-last\"]";

impl ExtractionRule {
    fn new(symbol: Symbol, url: &str) -> Self {
        ExtractionRule {
            symbol,
            url: url.to_string(),
            selector: PRICE_SELECTOR.to_string(),
            version: 1,
        }
    }

    /// The three tracked upstream pages, selector revision as of config v1.
    pub fn defaults() -> Vec<ExtractionRule> {
        vec![
            ExtractionRule::new(Symbol::GoldSpot, "https://www.investing.com/commodities/gold"),
            ExtractionRule::new(
                Symbol::GoldFutures,
                "https://www.investing.com/commodities/gold-futures",
            ),
            ExtractionRule::new(Symbol::DollarIndex, "https://www.investing.com/indices/usdollar"),
        ]
    }
}
