//! Server settings read from the environment.
//!
//! | Variable               | Default        |
//! |------------------------|----------------|
//! | `KIOSK_DATA_DIR`       | `./data`       |
//! | `KIOSK_BIND_ADDR`      | `0.0.0.0:3001` |
//! | `KIOSK_ALLOWED_ORIGIN` | any origin     |

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "KIOSK_DATA_DIR";
pub const BIND_ADDR_VAR: &str = "KIOSK_BIND_ADDR";
pub const ALLOWED_ORIGIN_VAR: &str = "KIOSK_ALLOWED_ORIGIN";

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// Directory holding `config.json`
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS; `None` allows any
    pub allowed_origin: Option<HeaderValue>,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_opt = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var_opt(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(var_or(DATA_DIR_VAR, DEFAULT_DATA_DIR));

        let bind_addr = var_or(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid {}: '{}'", BIND_ADDR_VAR, bind_addr))?;

        let allowed_origin = var_opt(ALLOWED_ORIGIN_VAR)
            .map(|origin| {
                HeaderValue::from_str(&origin)
                    .with_context(|| format!("Invalid {}: '{}'", ALLOWED_ORIGIN_VAR, origin))
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            bind_addr,
            allowed_origin,
        })
    }
}
