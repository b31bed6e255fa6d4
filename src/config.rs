// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup into
//! [`AppConfig`]. Invalid values fail startup instead of falling back.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LEDGER_PATH` | redb ledger file; unset runs an in-memory ledger | unset |
//! | `SUBMIT_ATTEMPTS` | Executions per submit before a conflict is reported | `3` |
//! | `STRICT_AMOUNTS` | Reject negative balances and transfer amounts | `false` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::contract::AmountPolicy;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Path of the durable ledger file.
///
/// The parent directory is created on first open.
pub const LEDGER_PATH_ENV: &str = "LEDGER_PATH";

/// Upper bound on re-executions after commit conflicts.
pub const SUBMIT_ATTEMPTS_ENV: &str = "SUBMIT_ATTEMPTS";

pub const STRICT_AMOUNTS_ENV: &str = "STRICT_AMOUNTS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SUBMIT_ATTEMPTS: u32 = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Where the ledger lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerBackend {
    Memory,
    Redb(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub ledger: LedgerBackend,
    pub submit_attempts: u32,
    pub amount_policy: AmountPolicy,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup(HOST_ENV) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::invalid(HOST_ENV, &value, format!("{e}")))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup(PORT_ENV) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::invalid(PORT_ENV, &value, format!("{e}")))?,
            None => DEFAULT_PORT,
        };

        let ledger = match lookup(LEDGER_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => LedgerBackend::Redb(PathBuf::from(path)),
            _ => LedgerBackend::Memory,
        };

        let submit_attempts = match lookup(SUBMIT_ATTEMPTS_ENV) {
            Some(value) => {
                let attempts: u32 = value
                    .parse()
                    .map_err(|e| ConfigError::invalid(SUBMIT_ATTEMPTS_ENV, &value, format!("{e}")))?;
                if attempts == 0 {
                    return Err(ConfigError::invalid(
                        SUBMIT_ATTEMPTS_ENV,
                        &value,
                        "must be at least 1",
                    ));
                }
                attempts
            }
            None => DEFAULT_SUBMIT_ATTEMPTS,
        };

        let amount_policy = match lookup(STRICT_AMOUNTS_ENV).as_deref() {
            None | Some("false") | Some("0") => AmountPolicy::PassThrough,
            Some("true") | Some("1") => AmountPolicy::RejectNegative,
            Some(other) => {
                return Err(ConfigError::invalid(
                    STRICT_AMOUNTS_ENV,
                    other,
                    "expected true or false",
                ))
            }
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::invalid(
                    LOG_FORMAT_ENV,
                    other,
                    "expected json or pretty",
                ))
            }
        };

        Ok(Self {
            host,
            port,
            ledger,
            submit_attempts,
            amount_policy,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
