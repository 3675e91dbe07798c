//! Model output handling: fence stripping and JSON decoding.

use serde_json::Value;

use crate::errors::AppError;

const FENCE: &str = "```";

/// Strips a wrapping ``` fence from model output.
///
/// When the trimmed text starts with a fence, the first line (which may carry a
/// language tag) is dropped, and so is the last line if it is a closing fence.
/// Unfenced text comes back trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();
    if !text.starts_with(FENCE) {
        return text;
    }

    let body = match text.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };

    let body = match body.rsplit_once('\n') {
        Some((head, last)) if last.trim().starts_with(FENCE) => head,
        None if body.trim().starts_with(FENCE) => "",
        _ => body,
    };

    body.trim()
}

/// Strips any fence and parses what remains as JSON.
pub fn decode_model_output(raw: &str) -> Result<Value, AppError> {
    Ok(serde_json::from_str(strip_code_fence(raw))?)
}
