//! Share-link encoding
//!
//! A ledger travels as base64 of its JSON payload, carried in the `data`
//! query parameter of a link. Links are written with the URL-safe alphabet;
//! reading also accepts the standard alphabet, with or without padding.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

use super::payload::SharePayload;
use crate::error::{SplitError, SplitResult};
use crate::models::Ledger;

/// Query parameter holding the encoded ledger
pub const QUERY_PARAM: &str = "data";

/// Result of a decode that never fails
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutcome {
    /// The decoded ledger, or an empty one if decoding failed
    pub ledger: Ledger,
    /// Why the payload was rejected, if it was
    pub warning: Option<String>,
}

/// Encode a ledger as a compact URL-safe string
pub fn encode_ledger(ledger: &Ledger) -> SplitResult<String> {
    let json = serde_json::to_vec(&SharePayload::from(ledger))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Build a full share link under `base_url`
pub fn share_url(base_url: &str, ledger: &Ledger) -> SplitResult<String> {
    let encoded = encode_ledger(ledger)?;
    let separator = if base_url.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}{}={}", base_url, separator, QUERY_PARAM, encoded))
}

/// Decode a ledger from a share link or a bare payload
pub fn decode_ledger(input: &str) -> SplitResult<Ledger> {
    let encoded = unescape(extract_payload(input));
    if encoded.is_empty() {
        return Err(SplitError::Share("share link carries no data".into()));
    }

    let bytes = [URL_SAFE_NO_PAD, URL_SAFE, STANDARD, STANDARD_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(encoded.as_bytes()).ok())
        .ok_or_else(|| SplitError::Share("payload is not valid base64".into()))?;

    let payload: SharePayload = serde_json::from_slice(&bytes)
        .map_err(|e| SplitError::Share(format!("payload is not a ledger: {}", e)))?;

    payload
        .into_ledger()
        .map_err(|e| SplitError::Share(e.to_string()))
}

/// Decode a ledger, falling back to an empty ledger on any failure
pub fn decode_or_default(input: &str) -> DecodeOutcome {
    match decode_ledger(input) {
        Ok(ledger) => DecodeOutcome {
            ledger,
            warning: None,
        },
        Err(err) => {
            tracing::warn!("failed to load shared ledger: {err}");
            DecodeOutcome {
                ledger: Ledger::default(),
                warning: Some(err.to_string()),
            }
        }
    }
}

/// The `data` parameter of a URL, or the whole input if there is none
fn extract_payload(input: &str) -> &str {
    let input = input.trim();
    let needle = format!("{}=", QUERY_PARAM);

    let query_start = input.find('?').map(|i| i + 1).unwrap_or(input.len());
    let query = &input[query_start..];
    let query = query.split('#').next().unwrap_or(query);

    let found = query
        .split('&')
        .find_map(|pair| pair.strip_prefix(needle.as_str()));
    match found {
        Some(value) => value,
        None if query_start == input.len() => input,
        None => "",
    }
}

/// Undo the percent-escapes browsers apply to base64 characters
fn unescape(value: &str) -> String {
    value
        .replace("%3D", "=")
        .replace("%3d", "=")
        .replace("%2B", "+")
        .replace("%2b", "+")
        .replace("%2F", "/")
        .replace("%2f", "/")
}
