//! Translate query descriptions read as JSON text

use super::{json_to_value, value_to_json, CliError};
use crate::mapper;

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// JSON text of the query description
    pub description: Option<String>,
}

/// Result of a translate operation, ready for JSON printing
#[derive(Debug)]
pub struct TranslateResult {
    /// The rewritten filter document
    pub query: serde_json::Value,
    /// The extracted projection document
    pub projection: serde_json::Value,
}

/// Parse the description as JSON, run the mapper, and hand back both
/// documents as serde_json values.
pub fn execute_translate(options: &TranslateOptions) -> Result<TranslateResult, CliError> {
    let text = options.description.as_ref().ok_or(CliError::NoInput)?;

    let json: serde_json::Value = serde_json::from_str(text).map_err(CliError::Json)?;
    let description = json_to_value(json);

    let result = mapper::translate(&description);

    Ok(TranslateResult {
        query: value_to_json(result.query),
        projection: value_to_json(result.projection),
    })
}
