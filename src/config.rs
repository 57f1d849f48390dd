// src/config.rs
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Host of the catalog API, without the endpoint path.
    pub api_base_url: String,
    pub postcode: String,
    pub area: String,
    /// Bound on the whole catalog request.
    pub timeout_secs: u64,
    /// Bucket holding `<size>-yarder-skip.jpg` images.
    pub image_base_url: String,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base_url: "https://app.wewantwaste.co.uk".to_string(),
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            timeout_secs: 10,
            image_base_url:
                "https://yozbrydxdlcxghkphhtq.supabase.co/storage/v1/object/public/skips/skip-sizes"
                    .to_string(),
            max_workers: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("SKIPS_BIND_ADDR") {
            cfg.bind_addr = v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "SKIPS_BIND_ADDR",
                expected: "socket address",
                value: v.clone(),
            })?;
        }
        if let Some(v) = get("SKIPS_API_BASE_URL") {
            cfg.api_base_url = v;
        }
        if let Some(v) = get("SKIPS_POSTCODE") {
            cfg.postcode = v;
        }
        if let Some(v) = get("SKIPS_AREA") {
            cfg.area = v;
        }
        if let Some(v) = get("SKIPS_TIMEOUT_SECS") {
            cfg.timeout_secs = parse_positive(&v, "SKIPS_TIMEOUT_SECS")? as u64;
        }
        if let Some(v) = get("SKIPS_IMAGE_BASE_URL") {
            cfg.image_base_url = v;
        }
        if let Some(v) = get("SKIPS_MAX_WORKERS") {
            cfg.max_workers = parse_positive(&v, "SKIPS_MAX_WORKERS")?;
        }

        Ok(cfg)
    }
}

fn parse_positive(value: &str, var: &'static str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "positive integer",
            value: value.to_string(),
        }),
    }
}
