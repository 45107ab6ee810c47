//! Inbound image normalization.
//!
//! Three wire encodings reach the gateway: a raw multipart upload, a JSON
//! data-URI string, and a degenerate raw-base64 JSON string. All of them
//! normalize into an [`ImagePayload`] (MIME type + base64 data) before
//! forwarding. Bytes are never validated as a decodable image; a malformed
//! payload is forwarded as-is and surfaces as an upstream error.

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;

pub const DEFAULT_MIME: &str = "image/png";

/// Normalized inline image: MIME type plus base64-encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

fn mime_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*$")
            .expect("MIME pattern regex is valid")
    })
}

impl ImagePayload {
    /// Multipart path: raw bytes plus the part's declared content type.
    pub fn from_bytes(bytes: &[u8], mime_type: Option<&str>) -> Self {
        Self {
            mime_type: mime_type
                .filter(|m| mime_pattern().is_match(m))
                .unwrap_or(DEFAULT_MIME)
                .to_string(),
            data: BASE64.encode(bytes),
        }
    }

    /// JSON path: a `data:<mime>;base64,<payload>` string, or bare base64.
    ///
    /// A data-URI with an unparseable MIME keeps its payload but defaults
    /// the type to `image/png`; a string without the data-URI marker is
    /// treated as raw base64 with the same default type.
    pub fn from_json_field(value: &str) -> Self {
        match value.split_once(";base64,") {
            Some((header, payload)) => {
                let mime_type = header
                    .strip_prefix("data:")
                    .filter(|m| mime_pattern().is_match(m))
                    .unwrap_or(DEFAULT_MIME);
                Self { mime_type: mime_type.to_string(), data: payload.to_string() }
            }
            None => Self { mime_type: DEFAULT_MIME.to_string(), data: value.to_string() },
        }
    }

    /// Re-encode as a data-URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the base64 payload back into bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }
}
