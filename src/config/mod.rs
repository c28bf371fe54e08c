//! JSON loading of [`GridParams`].
//!
//! Every parameter struct is `#[serde(default)]`, so a file only needs the
//! knobs it changes:
//!
//! ```json
//! { "resolver": { "tolerance": { "absolute": 0.25 } } }
//! ```

use crate::GridParams;
use std::fs;
use std::path::Path;

pub fn load_params(path: &Path) -> Result<GridParams, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_params(json: &str) -> Result<GridParams, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}
