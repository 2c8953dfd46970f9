//! Environment-driven API configuration.
//!
//! Route prefix and repository wiring belong to the hosting environment,
//! not to the lookup surface itself, so everything here comes from env vars.

use std::time::Duration;

use anyhow::Context;

/// Runtime configuration for the API process.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: String,

    /// Literal first path segment of the lookup route (no slashes).
    pub route_prefix: String,

    /// Optional handler-side deadline for one repository call.
    ///
    /// `None` means the repository call is awaited without a deadline and
    /// any timeout policy lives in the repository or an upstream layer.
    pub lookup_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            route_prefix: "catalog".to_string(),
            lookup_timeout: None,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the environment.
    ///
    /// - `BIND_ADDR` (default `0.0.0.0:8080`)
    /// - `CATALOG_ROUTE_PREFIX` (default `catalog`)
    /// - `LOOKUP_TIMEOUT_MS` (unset means no handler-side timeout)
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);

        let route_prefix =
            std::env::var("CATALOG_ROUTE_PREFIX").unwrap_or(defaults.route_prefix);
        if route_prefix.trim().is_empty() || route_prefix.contains('/') {
            anyhow::bail!("CATALOG_ROUTE_PREFIX must be a single non-empty path segment");
        }

        let lookup_timeout = match std::env::var("LOOKUP_TIMEOUT_MS") {
            Ok(raw) => {
                let millis: u64 = raw
                    .parse()
                    .with_context(|| format!("LOOKUP_TIMEOUT_MS is not a number: {raw:?}"))?;
                Some(Duration::from_millis(millis))
            }
            Err(_) => None,
        };

        Ok(Self {
            bind_addr,
            route_prefix,
            lookup_timeout,
        })
    }
}
