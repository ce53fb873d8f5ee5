//! JSON export of analysis results.

use crate::error::{Error, Result};
use crate::model::StructureMap;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a structure map to JSON.
pub fn to_json(map: &StructureMap, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(map),
        JsonFormat::Compact => serde_json::to_string(map),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Read a structure map back from JSON.
pub fn from_json(json: &str) -> Result<StructureMap> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}
