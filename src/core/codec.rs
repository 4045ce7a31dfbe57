// src/core/codec.rs
use crate::models::{SharedState, Subject};
use anyhow::{Context as _, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use std::string::FromUtf8Error;
use thiserror::Error;
use tracing::{debug, warn};

/// Query parameter that carries the encoded subject list.
pub const DATA_PARAM: &str = "data";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("share token is empty")]
    Empty,
    #[error("share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share token is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("share token does not hold a subject list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes the subject list into a URL-safe token.
///
/// Ungraded assignments are written with an explicit `"grade": null`.
///
/// # Errors
///
/// Returns an error if a weight or grade is NaN or infinite, since the
/// token could not be decoded again, or if serialization fails.
pub fn encode(subjects: &[Subject]) -> Result<String> {
    for subject in subjects {
        if let Some(assignment) = subject.non_finite_assignment() {
            bail!(
                "Cannot share subject '{}': assignment '{}' has a non-numeric weight or grade",
                subject.name,
                assignment.name
            );
        }
    }
    let state = SharedState {
        subjects: subjects.to_vec(),
    };
    let json = serde_json::to_string(&state).context("Failed to serialize subjects")?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a token produced by [`encode`].
///
/// Tokens in the standard base64 alphabet (with `+`, `/` and padding) are
/// accepted too.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the token is empty, is not base64, or does
/// not decode to a subjects document.
pub fn decode_token(token: &str) -> Result<Vec<Subject>, DecodeError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = match URL_SAFE_NO_PAD.decode(token.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(_) => STANDARD.decode(token)?,
    };
    let json = String::from_utf8(bytes)?;
    let state: SharedState = serde_json::from_str(&json)?;
    Ok(state.subjects)
}

/// Restores the subject list from a query string or a full share link.
///
/// Returns `None` when there is no `data` parameter or when the token cannot
/// be decoded. Failures are logged and never propagated.
#[must_use]
pub fn decode(query: &str) -> Option<Vec<Subject>> {
    let token = query_param(query, DATA_PARAM)?;
    match decode_token(&token) {
        Ok(subjects) => {
            debug!(subjects = subjects.len(), "restored shared state");
            Some(subjects)
        }
        Err(e) => {
            warn!(error = %e, "failed to decode state from share link");
            None
        }
    }
}

/// Builds `<base>?data=<token>`, or `None` for an empty subject list.
///
/// Any query or fragment already present on `base_url` is dropped.
///
/// # Errors
///
/// Returns an error if the subject list cannot be encoded.
pub fn share_link(base_url: &str, subjects: &[Subject]) -> Result<Option<String>> {
    if subjects.is_empty() {
        return Ok(None);
    }
    let base = base_url
        .split(['?', '#'])
        .next()
        .unwrap_or(base_url);
    let token = encode(subjects)?;
    Ok(Some(format!("{base}?{DATA_PARAM}={token}")))
}

/// Looks up a query parameter, accepting either a bare query (`?a=b`, `a=b`)
/// or a full link. Empty values count as missing.
fn query_param(input: &str, key: &str) -> Option<String> {
    let query = input.split_once('?').map_or(input, |(_, query)| query);
    let query = query.split('#').next().unwrap_or(query);

    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| urlencoding::decode(name).is_ok_and(|name| name == key))
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}
