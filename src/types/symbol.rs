use serde::{Deserialize, Serialize};

/// The three instruments tracked by the service. Closed set: a snapshot
/// always carries exactly one quote per symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "gold-spot")]
    GoldSpot,
    #[serde(rename = "gold-futures")]
    GoldFutures,
    #[serde(rename = "dxy")]
    DollarIndex,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::GoldSpot, Symbol::GoldFutures, Symbol::DollarIndex];

    /// Stable wire name, used in config files and API routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::GoldSpot => "gold-spot",
            Symbol::GoldFutures => "gold-futures",
            Symbol::DollarIndex => "dxy",
        }
    }

    /// Human-readable label for the HTML summary page.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::GoldSpot => "Gold Spot",
            Symbol::GoldFutures => "Gold Futures",
            Symbol::DollarIndex => "DXY Index",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_api_routes() {
        assert_eq!(Symbol::GoldSpot.as_str(), "gold-spot");
        assert_eq!(Symbol::GoldFutures.as_str(), "gold-futures");
        assert_eq!(Symbol::DollarIndex.as_str(), "dxy");
    }

    #[test]
    fn serde_roundtrip_uses_wire_names() {
        for symbol in Symbol::ALL {
            let json = serde_json::to_string(&symbol).unwrap();
            assert_eq!(json, format!("\"{}\"", symbol.as_str()));
            let back: Symbol = serde_json::from_str(&json).unwrap();
            assert_eq!(back, symbol);
        }
    }
}
