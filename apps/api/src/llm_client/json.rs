//! Locating a JSON object inside free-form model output.
//!
//! Models asked for "JSON only" still wrap it in prose or code fences now and
//! then. The locating strategy is a trait so a stricter one can replace
//! `BraceSpan` without the callers changing.

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonExtractError {
    #[error("no JSON object found in model output")]
    NotFound,

    #[error("invalid JSON in model output: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Finds the slice of `text` that should be parsed as JSON.
pub trait JsonLocator {
    fn locate<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// Takes everything from the first `{` to the last `}`, inclusive.
/// Best effort: truncated or unbalanced output fails at parse time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceSpan;

impl JsonLocator for BraceSpan {
    fn locate<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        (end > start).then(|| &text[start..=end])
    }
}

/// Locates and deserializes a JSON object from model output.
pub fn parse_model_json<T, L>(text: &str, locator: &L) -> Result<T, JsonExtractError>
where
    T: DeserializeOwned,
    L: JsonLocator + ?Sized,
{
    let slice = locator.locate(text).ok_or(JsonExtractError::NotFound)?;
    Ok(serde_json::from_str(slice)?)
}
