//! Wire types for the validator's reply.
//!
//! The validator answers a guess with a text body containing the envelope
//! `{"result":"<symbols>","attempts":[...]}`, or with a plain-text rejection
//! starting with `Invalid`. Parsing is key-addressed rather than
//! offset-based, so reordered or padded bodies still parse.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix the server uses for rejections instead of an envelope, and for
/// rejection text smuggled into the `result` field.
pub const INVALID_MARKER: &str = "invalid";

/// Token appended to `result` when the server closes the session after a
/// winning guess (`"GGGGG GAMEOVER"`).
pub const SESSION_CLOSED_MARKER: &str = "GAMEOVER";

/// The reply envelope as a compliant server would serialize it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerdictEnvelope {
    pub result: String,
    #[serde(default)]
    pub attempts: Vec<String>,
}

/// A parsed validator reply.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerReply {
    /// A scored guess: raw verdict symbols, whether the server closed the
    /// session, and the attempt history it echoed back.
    Verdict {
        symbols: String,
        session_closed: bool,
        attempts: Vec<String>,
    },
    /// The server rejected the guess; carries the raw server text.
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("no verdict envelope in the response body")]
    MissingEnvelope,
    #[error("unparseable verdict envelope: {0}")]
    BadEnvelope(String),
}

pub fn parse_reply(body: &str) -> Result<ServerReply, ProtocolError> {
    let trimmed = body.trim();
    if starts_with_ignore_case(trimmed, INVALID_MARKER) {
        return Ok(ServerReply::Invalid(trimmed.to_owned()));
    }

    let envelope = locate_envelope(body).ok_or(ProtocolError::MissingEnvelope)?;
    let envelope = match serde_json::from_str::<VerdictEnvelope>(envelope) {
        Ok(envelope) => envelope,
        // The legacy server writes `attempts` as `[CRANE, AUDIO]`, which is
        // not JSON; fall back to key-addressed extraction.
        Err(_) => parse_legacy(envelope)?,
    };

    if starts_with_ignore_case(&envelope.result, INVALID_MARKER) {
        return Ok(ServerReply::Invalid(envelope.result));
    }

    let mut tokens = envelope.result.split_whitespace();
    let symbols = tokens.next().unwrap_or_default().to_owned();
    let session_closed = tokens.any(|token| token == SESSION_CLOSED_MARKER);

    Ok(ServerReply::Verdict {
        symbols,
        session_closed,
        attempts: envelope.attempts,
    })
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len()
        && text.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn locate_envelope(body: &str) -> Option<&str> {
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    (start < end).then(|| &body[start..=end])
}

fn parse_legacy(envelope: &str) -> Result<VerdictEnvelope, ProtocolError> {
    const RESULT_KEY: &str = "\"result\":\"";

    let start = envelope
        .find(RESULT_KEY)
        .ok_or_else(|| ProtocolError::BadEnvelope("no result field".into()))?
        + RESULT_KEY.len();
    let len = envelope[start..]
        .find('"')
        .ok_or_else(|| ProtocolError::BadEnvelope("unterminated result field".into()))?;
    let result = envelope[start..start + len].to_owned();

    let attempts = match (envelope.find('['), envelope.rfind(']')) {
        (Some(open), Some(close)) if open < close => envelope[open + 1..close]
            .split(',')
            .map(|attempt| attempt.trim().trim_matches('"').to_owned())
            .filter(|attempt| !attempt.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    Ok(VerdictEnvelope { result, attempts })
}
