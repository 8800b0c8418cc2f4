use async_trait::async_trait;

use super::ExtractionRule;
use super::extractor;
use super::fetcher::Fetcher;
use crate::error::Result;
use crate::observability::metrics::SCRAPE_FAILURES;
use crate::types::symbol::Symbol;

/// One upstream quote source. A trait seam so cycle scheduling can be
/// exercised against fakes without network access.
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn symbol(&self) -> Symbol;
    async fn latest_price(&self) -> Result<f64>;
}

/// Fetch + extract for one scraped page, per its extraction rule.
pub struct ScrapedSource {
    fetcher: Fetcher,
    rule: ExtractionRule,
}

impl ScrapedSource {
    pub fn new(fetcher: Fetcher, rule: ExtractionRule) -> Self {
        ScrapedSource { fetcher, rule }
    }
}

#[async_trait]
impl PriceSource for ScrapedSource {
    fn symbol(&self) -> Symbol {
        self.rule.symbol
    }

    async fn latest_price(&self) -> Result<f64> {
        let content = self.fetcher.fetch(&self.rule.url).await?;
        Ok(extractor::extract(&content, &self.rule)?)
    }
}

/// Runs one source per cycle and absorbs its failures: a broken source
/// yields an unavailable price for this cycle, nothing more. Failure of one
/// job never blocks or invalidates the others.
pub struct SourceJob {
    source: Box<dyn PriceSource>,
}

impl SourceJob {
    pub fn new(source: impl PriceSource + 'static) -> Self {
        SourceJob {
            source: Box::new(source),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.source.symbol()
    }

    pub async fn run(&self) -> Option<f64> {
        match self.source.latest_price().await {
            Ok(price) => Some(price),
            Err(err) => {
                SCRAPE_FAILURES.inc();
                tracing::warn!("{} scrape failed: {}", self.symbol(), err);
                None
            }
        }
    }
}
