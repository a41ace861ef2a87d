//! Decoding of the service's JSON reply bodies.
//!
//! Every endpoint answers with either `{"error": ...}` or a success shape,
//! independent of the HTTP status. Only a truthy `error` counts as a
//! rejection: absent, `null`, `false`, `0` and `""` do not.

use serde::Deserialize;
use serde_json::Value;

use crate::{AnalysisReply, ClientError, FailureKind, UploadReply};

#[derive(Debug, Deserialize)]
struct RawUploadReply {
    error: Option<Value>,
    enhanced_resume: Option<String>,
    download_url: Option<String>,
    original_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnalysisReply {
    error: Option<Value>,
    analysis: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawErrorReply {
    error: Option<Value>,
}

pub fn parse_upload_reply(body: &[u8]) -> Result<UploadReply, ClientError> {
    let raw: RawUploadReply = decode(body)?;
    if let Some(error) = error_message(raw.error) {
        return Ok(UploadReply::Rejected { error });
    }
    match (raw.enhanced_resume, raw.download_url) {
        (Some(enhanced_resume), Some(download_url)) => Ok(UploadReply::Enhanced {
            enhanced_resume,
            download_url,
            original_text: raw.original_text,
        }),
        _ => Err(ClientError::new(
            FailureKind::MalformedResponse,
            "upload reply lacks enhanced_resume or download_url",
        )),
    }
}

pub fn parse_analysis_reply(body: &[u8]) -> Result<AnalysisReply, ClientError> {
    let raw: RawAnalysisReply = decode(body)?;
    if let Some(error) = error_message(raw.error) {
        return Ok(AnalysisReply::Rejected { error });
    }
    raw.analysis
        .map(|analysis| AnalysisReply::Analysis { analysis })
        .ok_or_else(|| {
            ClientError::new(FailureKind::MalformedResponse, "analysis reply lacks analysis")
        })
}

/// Extracts the `error` message from a JSON error body, if the body is one.
pub fn parse_error_reply(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<RawErrorReply>(body)
        .ok()
        .and_then(|raw| error_message(raw.error))
}

fn decode<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::MalformedResponse, err.to_string()))
}

/// Message for a truthy `error` value; strings are shown as-is, anything else as JSON.
fn error_message(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
