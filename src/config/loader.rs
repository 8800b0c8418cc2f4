use config::{Config, Environment, File};
use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::config::{SchedulerConfig, ServerConfig};
use crate::error::{Error, Result};
use crate::scrape::ExtractionRule;
use crate::types::symbol::Symbol;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    pub sources: Vec<ExtractionRule>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            scheduler: SchedulerConfig::default(),
            sources: ExtractionRule::defaults(),
        }
    }
}

impl AppConfig {
    /// Layering: built-in defaults, then the optional config file, then
    /// GOLDTRACKER_* environment overrides, then the plain PORT variable
    /// for the listening port.
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&AppConfig::default())
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("GOLDTRACKER").separator("__"))
            .build()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        let mut app: AppConfig = config
            .try_deserialize()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        if let Ok(port) = std::env::var("PORT") {
            app.server.port = port
                .parse()
                .map_err(|_| Error::ConfigError(format!("invalid PORT value {port:?}")))?;
        }

        app.validate()?;
        Ok(app)
    }

    /// Exactly one rule per tracked symbol, and every selector must parse.
    /// Rejecting a bad selector here keeps a config revision from silently
    /// blanking a symbol at extraction time.
    pub fn validate(&self) -> Result<()> {
        for symbol in Symbol::ALL {
            let count = self.sources.iter().filter(|r| r.symbol == symbol).count();
            if count != 1 {
                return Err(Error::ConfigError(format!(
                    "expected exactly one source for {symbol}, found {count}"
                )));
            }
        }
        for rule in &self.sources {
            if Selector::parse(&rule.selector).is_err() {
                return Err(Error::ConfigError(format!(
                    "source {} has an unparseable selector {:?}",
                    rule.symbol, rule.selector
                )));
            }
        }
        Ok(())
    }
}
