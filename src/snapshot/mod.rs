pub mod store;

pub use store::SnapshotStore;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::symbol::Symbol;

/// One symbol's latest known state.
///
/// `last_updated` advances on every refresh attempt, successful or not;
/// `last_success` only advances when an attempt produced a price. API
/// consumers can tell "fresh information" apart from "fresh number".
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Quote {
    pub price: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_success: Option<DateTime<Utc>>,
}

/// The complete committed state: exactly one quote per tracked symbol,
/// enforced structurally. Created at process start with everything unknown,
/// then wholly replaced once per completed refresh cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub gold_spot: Quote,
    pub gold_futures: Quote,
    pub dxy: Quote,
}

impl Snapshot {
    pub fn quote(&self, symbol: Symbol) -> &Quote {
        match symbol {
            Symbol::GoldSpot => &self.gold_spot,
            Symbol::GoldFutures => &self.gold_futures,
            Symbol::DollarIndex => &self.dxy,
        }
    }

    fn quote_mut(&mut self, symbol: Symbol) -> &mut Quote {
        match symbol {
            Symbol::GoldSpot => &mut self.gold_spot,
            Symbol::GoldFutures => &mut self.gold_futures,
            Symbol::DollarIndex => &mut self.dxy,
        }
    }

    /// Assemble the snapshot for a completed cycle. Every attempted symbol
    /// gets the same cycle timestamp; a failed attempt clears the price but
    /// keeps `last_success` from the previous snapshot.
    pub fn next_cycle(
        prev: &Snapshot,
        results: &[(Symbol, Option<f64>)],
        now: DateTime<Utc>,
    ) -> Snapshot {
        let mut next = prev.clone();
        for &(symbol, price) in results {
            let quote = next.quote_mut(symbol);
            quote.price = price;
            quote.last_updated = Some(now);
            if price.is_some() {
                quote.last_success = Some(now);
            }
        }
        next
    }
}
