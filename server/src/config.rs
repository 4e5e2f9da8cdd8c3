//! Host configuration parsed from environment variables.
//!
//! Leptos reads its own `LEPTOS_*` variables; this layer only lets a
//! platform-provided `PORT` / `BIND_ADDR` override the listen address.

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostConfig {
    pub bind_addr: Option<IpAddr>,
    pub port: Option<u16>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: IP to listen on, overrides the Leptos `site_addr` IP
    /// - `PORT`: port to listen on, overrides the Leptos `site_addr` port
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?,
            port: parse_var(&lookup, "PORT")?,
        })
    }

    /// Listen address: Leptos `site_addr` with any overrides applied.
    pub fn resolve_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        SocketAddr::new(
            self.bind_addr.unwrap_or_else(|| site_addr.ip()),
            self.port.unwrap_or_else(|| site_addr.port()),
        )
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ServerError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ServerError::Config { var: key, value: raw.clone() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
