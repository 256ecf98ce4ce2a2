//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Directory holding saved-game slots.
    pub save_dir: PathBuf,
    /// Fixed RNG seed for reproducible races; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads `HOST`, `PORT`, `QIYAO_SAVE_DIR` and `QIYAO_SEED` from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;

        let save_dir =
            lookup("QIYAO_SAVE_DIR").map_or_else(|| PathBuf::from("./saves"), PathBuf::from);

        let seed = lookup("QIYAO_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|e| AppError::Config(format!("QIYAO_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            addr,
            save_dir,
            seed,
        })
    }
}
