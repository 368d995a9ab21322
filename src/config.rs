use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,

    /// Token expected on webhook verification requests
    pub verify_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Message provider settings. Credentials come from the environment overlay
/// (e.g. RASID__PROVIDER__API_KEY) rather than the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider kind: "dialog360" or "twilio"
    pub kind: String,

    /// 360dialog API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Twilio account SID
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Twilio auth token
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Twilio WhatsApp sender number
    #[serde(default)]
    pub from_number: Option<String>,

    /// Country code prefixed to outbound numbers that lack one
    #[serde(default = "default_country_code")]
    pub country_code: String,

    /// Per-send deadline in milliseconds
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Store backend kind: "memory"
    #[serde(default = "default_store_kind")]
    pub kind: String,

    /// Per-call deadline in milliseconds
    #[serde(default = "default_store_timeout_ms")]
    pub call_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: default_store_kind(),
            call_timeout_ms: default_store_timeout_ms(),
        }
    }
}

fn default_country_code() -> String {
    "964".to_string()
}

fn default_send_timeout_ms() -> u64 {
    10_000
}

fn default_store_kind() -> String {
    "memory".to_string()
}

fn default_store_timeout_ms() -> u64 {
    5_000
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("RASID").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
