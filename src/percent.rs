//! Percent-encoding of data URI payloads.
//!
//! Decoding follows form encoding: `+` is a space and `%XX` is a byte.
//! Both `+` and `%20` decode to a space, so a payload does not always
//! re-encode to the text it was parsed from.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes written verbatim when encoding; everything else becomes `%XX`.
const DATA_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Decodes a raw payload. Malformed `%` sequences are kept as written and
/// invalid UTF-8 becomes U+FFFD.
pub(crate) fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Encodes a decoded payload, writing spaces as `+`.
pub(crate) fn encode(data: &str) -> String {
    data.split(' ')
        .map(|chunk| utf8_percent_encode(chunk, DATA_ESCAPE_SET).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
