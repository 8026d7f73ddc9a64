//! Listener configuration parsed from environment variables.
//!
//! The server listens on every interface by default. Only the port of the
//! Leptos site address (`[package.metadata.leptos]` or `LEPTOS_SITE_ADDR`)
//! is kept as the default port; `BIND_ADDR` and `PORT` override either half.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

/// Listen address used when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

impl ServerConfig {
    /// Build from the environment.
    ///
    /// Optional:
    /// - `BIND_ADDR`: IP address to listen on, default `0.0.0.0`
    /// - `PORT`: TCP port to listen on, default `default_port`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when either variable does not parse.
    pub fn from_env(default_port: u16) -> Result<Self, ServerError> {
        Self::from_values(
            default_port,
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    fn from_values(default_port: u16, bind: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let ip = match bind.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| invalid("BIND_ADDR", raw))?,
            None => DEFAULT_BIND_ADDR,
        };
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_port(raw)?,
            None => default_port,
        };
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_port(raw: &str) -> Result<u16, ServerError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid("PORT", raw)),
        Ok(port) => Ok(port),
    }
}

fn invalid(var: &'static str, value: &str) -> ServerError {
    ServerError::InvalidEnv { var, value: value.to_owned() }
}
