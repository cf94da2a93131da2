//! Service configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Port the HTTP server binds on all interfaces
    pub port: u16,
    /// Directory holding a static frontend to serve at `/`
    pub static_dir: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}

impl ServiceConfig {
    /// Read `RUBIKS_PORT` and `RUBIKS_STATIC_DIR`, keeping defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("RUBIKS_PORT") {
            Some(value) => value.trim().parse().map_err(|_| Error::Config {
                var: "RUBIKS_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let static_dir = lookup("RUBIKS_STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, static_dir })
    }
}
