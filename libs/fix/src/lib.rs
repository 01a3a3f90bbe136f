//! FIX-style tag-value codec
//!
//! Encodes and decodes messages made of `tag=value` fields joined and
//! terminated by SOH (0x01). This is only the wire framing borrowed from
//! FIX: no sequence numbers, no heartbeats, and the checksum field is a
//! fixed placeholder that is never recomputed or validated.
//!
//! Decoding preserves field order. Lookups use first-occurrence
//! semantics: `RawFix::get` returns the first field with a matching tag,
//! which is the observable contract for message-type detection.

use thiserror::Error;

/// Field delimiter (SOH).
pub const SOH: char = '\x01';

/// Protocol version emitted in tag 8.
pub const BEGIN_STRING: &str = "FIX.4.2";

/// Well-known tags used by the logon handshake.
pub mod tags {
    pub const BEGIN_STRING: u32 = 8;
    pub const CHECKSUM: u32 = 10;
    pub const MSG_TYPE: u32 = 35;
    pub const USERNAME: u32 = 553;
    pub const PASSWORD: u32 = 554;
}

/// Message type value for Logon.
pub const MSG_TYPE_LOGON: &str = "A";

/// Codec errors. Always surfaced to the caller, never silently corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixError {
    #[error("field {tag} contains the field delimiter")]
    InvalidFieldValue { tag: u32 },

    #[error("malformed field without '=': {segment:?}")]
    MalformedField { segment: String },
}

/// An outbound message: an ordered sequence of (tag, value) pairs.
///
/// Tag uniqueness is not enforced by the wire format; callers building
/// messages for lookup are expected to keep tags unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixMessage {
    fields: Vec<(u32, String)>,
}

impl FixMessage {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, preserving insertion order.
    pub fn field(mut self, tag: u32, value: impl Into<String>) -> Self {
        self.fields.push((tag, value.into()));
        self
    }

    /// Build a Logon message with the fixed tag layout the handshake uses:
    /// 8, 35=A, 553, 554, 10=000.
    pub fn logon(username: &str, password: &str) -> Self {
        Self::new()
            .field(tags::BEGIN_STRING, BEGIN_STRING)
            .field(tags::MSG_TYPE, MSG_TYPE_LOGON)
            .field(tags::USERNAME, username)
            .field(tags::PASSWORD, password)
            .field(tags::CHECKSUM, "000")
    }

    pub fn fields(&self) -> &[(u32, String)] {
        &self.fields
    }

    /// Serialize to the wire form: `tag=value` pairs joined and terminated
    /// by SOH. A value containing SOH would corrupt the framing, so it is
    /// rejected rather than emitted.
    pub fn encode(&self) -> Result<String, FixError> {
        let mut out = String::new();
        for (tag, value) in &self.fields {
            if value.contains(SOH) {
                return Err(FixError::InvalidFieldValue { tag: *tag });
            }
            out.push_str(&tag.to_string());
            out.push('=');
            out.push_str(value);
            out.push(SOH);
        }
        Ok(out)
    }
}

/// A decoded message, retaining wire order and any duplicate tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFix {
    fields: Vec<(u32, String)>,
}

impl RawFix {
    /// Parse a raw payload. Empty segments (e.g. after the trailing SOH)
    /// are skipped; a non-empty segment without `=` or with a non-numeric
    /// tag is malformed.
    pub fn decode(raw: &str) -> Result<Self, FixError> {
        let mut fields = Vec::new();
        for segment in raw.split(SOH) {
            if segment.is_empty() {
                continue;
            }
            let (tag, value) = segment
                .split_once('=')
                .ok_or_else(|| FixError::MalformedField {
                    segment: segment.to_string(),
                })?;
            let tag: u32 = tag.parse().map_err(|_| FixError::MalformedField {
                segment: segment.to_string(),
            })?;
            fields.push((tag, value.to_string()));
        }
        Ok(Self { fields })
    }

    /// First field whose tag matches, in wire order.
    pub fn get(&self, tag: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| v.as_str())
    }

    /// Value of tag 35, if present.
    pub fn msg_type(&self) -> Option<&str> {
        self.get(tags::MSG_TYPE)
    }

    pub fn fields(&self) -> &[(u32, String)] {
        &self.fields
    }
}
