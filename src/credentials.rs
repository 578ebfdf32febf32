//! API key handling.
//!
//! Both upstream services authenticate with a key passed as a query
//! parameter. Keys come from the environment (a local `.env` file is
//! honoured via `dotenv` in `main`); a missing key aborts the run
//! before any request is made.

use std::env;

use anyhow::{anyhow, Result};

/// Environment variable holding the KMA API Hub key.
pub const KMA_API_KEY: &str = "KMA_API_KEY";

/// Environment variable holding the Safetydata service key.
pub const SAFETYDATA_SERVICE_KEY: &str = "SAFETYDATA_SERVICE_KEY";

/// Reads a key from the environment, rejecting blank values.
pub fn require(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!(
            "No API key found: set the {} environment variable",
            name
        )),
    }
}

// -- Tests -------------------------------------------------------------------
