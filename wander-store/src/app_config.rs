use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub business_rules: BusinessRules,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Upper bound on travelers per booking; the payment form caps here.
    pub max_travelers: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Simulated typing delay before a bot reply is delivered.
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

fn default_reply_delay() -> u64 {
    500
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `WANDER__BUSINESS_RULES__MAX_TRAVELERS=10`
            .add_source(config::Environment::with_prefix("WANDER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
