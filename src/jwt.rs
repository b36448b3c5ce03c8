use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No JWT provided: pass a token as an argument or through stdin")]
    MissingToken,
    #[error("Failed to read JWT from stdin")]
    ReadStdin(#[source] std::io::Error),
    #[error("JWT is malformed: expected 3 dot-separated segments, found {found}")]
    Malformed { found: usize },
    #[error("Invalid base64 in {segment}: {reason}")]
    InvalidBase64 { segment: Segment, reason: String },
    #[error("Invalid JSON in {segment}: {error}")]
    InvalidJson {
        segment: Segment,
        error: serde_json::Error,
    },
}

impl Error {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingToken => 2,
            Error::Malformed { .. } => 3,
            Error::InvalidBase64 { .. } => 4,
            Error::InvalidJson { .. } => 5,
            Error::ReadStdin(_) => 1,
        }
    }
}

/// The decoded segments of a JWT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}

/// A token split into its three still-encoded segments.
#[derive(Debug, PartialEq, Eq)]
pub struct TokenParts<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Splits on `.`. Empty segments are left for the decoder to reject.
    pub fn split(token: &'a str) -> Result<Self, Error> {
        let parts: Vec<&str> = token.split('.').collect();
        debug!(segments = parts.len(), "split token");

        match parts[..] {
            [header, payload, signature] => Ok(TokenParts {
                header,
                payload,
                signature,
            }),
            _ => Err(Error::Malformed { found: parts.len() }),
        }
    }
}

/// Header and payload parsed as JSON; the signature stays base64url text.
#[derive(Debug, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

impl DecodedToken {
    pub fn try_get_claim(&self, key: &str) -> Option<&Value> {
        self.payload.as_object()?.get(key)
    }
}

impl FromStr for DecodedToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = TokenParts::split(s)?;

        let header = decode_segment(parts.header, Segment::Header)
            .and_then(|bytes| parse_segment(&bytes, Segment::Header))?;
        let payload = decode_segment(parts.payload, Segment::Payload)
            .and_then(|bytes| parse_segment(&bytes, Segment::Payload))?;

        Ok(DecodedToken {
            header,
            payload,
            signature: parts.signature.to_string(),
        })
    }
}

/// URL-safe alphabet with canonical padding; unused bits in the final symbol are ignored.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Appends the `=` padding that base64url usually omits.
///
/// Returns `None` when no amount of padding yields a valid length.
fn repad(encoded: &str) -> Option<String> {
    let pad = match encoded.len() % 4 {
        0 => 0,
        2 => 2,
        3 => 1,
        _ => return None,
    };
    let mut padded = String::with_capacity(encoded.len() + pad);
    padded.push_str(encoded);
    padded.push_str(&"=".repeat(pad));
    Some(padded)
}

pub fn decode_segment(encoded: &str, segment: Segment) -> Result<Vec<u8>, Error> {
    let padded = repad(encoded).ok_or_else(|| Error::InvalidBase64 {
        segment,
        reason: format!("invalid length {}", encoded.len()),
    })?;

    let bytes = URL_SAFE_LENIENT
        .decode(padded.as_bytes())
        .map_err(|e| Error::InvalidBase64 {
            segment,
            reason: e.to_string(),
        })?;
    debug!(%segment, bytes = bytes.len(), "decoded segment");

    Ok(bytes)
}

/// Parses decoded bytes as UTF-8 JSON. Any JSON value is accepted, not only objects.
pub fn parse_segment(bytes: &[u8], segment: Segment) -> Result<Value, Error> {
    serde_json::from_slice(bytes).map_err(|error| Error::InvalidJson { segment, error })
}
