// src/config.rs
use std::env;
use std::net::SocketAddr;

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Startup configuration. Built once in `main` and never mutated.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub bind_addr: SocketAddr,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.key_prefix())
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    /// A missing `GEMINI_API_KEY` is not an error here; model calls fail later instead.
    pub fn from_env() -> anyhow::Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid BIND_ADDR {bind_addr:?}"))?;

        Ok(Self {
            gemini_api_key,
            bind_addr,
        })
    }

    /// First four characters of the key, safe to log.
    pub fn key_prefix(&self) -> String {
        if self.gemini_api_key.is_empty() {
            return "<unset>".to_string();
        }
        let prefix: String = self.gemini_api_key.chars().take(4).collect();
        format!("{prefix}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_prefix_never_reveals_whole_key() {
        let cfg = Config {
            gemini_api_key: "AIzaSyExample".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        };
        assert_eq!(cfg.key_prefix(), "AIza…");
        assert!(!format!("{cfg:?}").contains("AIzaSyExample"));
    }

    #[test]
    fn empty_key_is_reported_as_unset() {
        let cfg = Config {
            gemini_api_key: String::new(),
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
        };
        assert_eq!(cfg.key_prefix(), "<unset>");
    }
}
