// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub hf_api_url: String,
    pub hf_model: String,
    pub hf_api_token: Option<String>,
    pub generation_timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = get("BIND_ADDR", "0.0.0.0:3000");
        let bind_addr: SocketAddr = bind
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "BIND_ADDR", value: bind })?;

        let timeout = get("GENERATION_TIMEOUT_SECS", "60");
        let secs: u64 = timeout
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "GENERATION_TIMEOUT_SECS", value: timeout })?;

        Ok(Self {
            bind_addr,
            hf_api_url: get("HF_API_URL", "https://api-inference.huggingface.co/models"),
            hf_model: get("HF_MODEL", "distilgpt2"),
            hf_api_token: lookup("HF_API_TOKEN").filter(|t| !t.trim().is_empty()),
            generation_timeout: Duration::from_secs(secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.hf_model, "distilgpt2");
        assert!(cfg.hf_api_token.is_none());
        assert_eq!(cfg.generation_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = Config::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("HF_MODEL", "gpt2"),
            ("HF_API_TOKEN", "hf_abc"),
            ("GENERATION_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.hf_model, "gpt2");
        assert_eq!(cfg.hf_api_token.as_deref(), Some("hf_abc"));
        assert_eq!(cfg.generation_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = Config::from_lookup(lookup(&[("GENERATION_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("GENERATION_TIMEOUT_SECS"));
    }
}
