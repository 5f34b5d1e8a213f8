//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use leptos::prelude::LeptosOptions;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_ROOT: &str = "target/site";
/// Name of the compiled WASM/JS/CSS bundle under `pkg/`.
pub const OUTPUT_NAME: &str = "roster";

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid ROSTER_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Directory holding the built site (`pkg/` lives under it).
    pub site_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            site_root: DEFAULT_SITE_ROOT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ROSTER_BIND_ADDR`: default `0.0.0.0`
    /// - `ROSTER_SITE_ROOT`: default `target/site`
    ///
    /// # Errors
    ///
    /// Returns an error when `PORT` or `ROSTER_BIND_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|source| ServerConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let ip = match var("ROSTER_BIND_ADDR") {
            Some(value) => {
                value.parse::<IpAddr>().map_err(|source| ServerConfigError::InvalidBindAddr { value, source })?
            }
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let site_root = var("ROSTER_SITE_ROOT").unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string());

        Ok(Self { bind: SocketAddr::new(ip, port), site_root })
    }

    /// Leptos options for SSR and the hydration script tags.
    #[must_use]
    pub fn leptos_options(&self) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name(OUTPUT_NAME)
            .site_root(self.site_root.clone())
            .build()
    }
}
