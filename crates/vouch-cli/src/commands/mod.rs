//! Command implementations.

pub mod gate;
pub mod merge;
pub mod prominence;
pub mod score;

pub use self::gate::execute_gate;
pub use self::merge::execute_merge;
pub use self::prominence::execute_prominence;
pub use self::score::execute_score;

use crate::error::{CliError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::InvalidInput(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&contents)?)
}
