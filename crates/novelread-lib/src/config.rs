use serde::{Deserialize, Serialize};

use crate::api::ApiUrls;
use crate::error::{Error, Result};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u32,
    #[serde(default = "default_synopsis_limit")]
    pub synopsis_limit: usize,
    #[serde(default = "default_parallax_rate")]
    pub parallax_rate: f64,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_autoplay_delay_ms() -> u32 {
    3_000
}

fn default_synopsis_limit() -> usize {
    500
}

fn default_parallax_rate() -> f64 {
    0.3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
            synopsis_limit: default_synopsis_limit(),
            parallax_rate: default_parallax_rate(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    /// Replace the API origin, keeping every other setting.
    pub fn with_api_base_url(self, api_base_url: &str) -> Result<Self> {
        Self {
            api_base_url: api_base_url.to_string(),
            ..self
        }
        .validated()
    }

    fn validated(mut self) -> Result<Self> {
        let base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "api_base_url must be an http(s) url, got {:?}",
                self.api_base_url
            )));
        }
        if self.autoplay_delay_ms == 0 {
            return Err(Error::InvalidConfig(
                "autoplay_delay_ms must be greater than zero".to_string(),
            ));
        }
        if self.synopsis_limit == 0 {
            return Err(Error::InvalidConfig(
                "synopsis_limit must be greater than zero".to_string(),
            ));
        }
        if !self.parallax_rate.is_finite() || self.parallax_rate < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "parallax_rate must be a finite, non-negative number, got {}",
                self.parallax_rate
            )));
        }

        self.api_base_url = base_url;
        Ok(self)
    }

    pub fn api(&self) -> ApiUrls {
        ApiUrls::new(&self.api_base_url)
    }
}
