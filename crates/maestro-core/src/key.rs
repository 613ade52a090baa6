//! Node keys.
//!
//! A key is the opaque handle the maestro API uses to address a domain, agent
//! or process. The server derives it by base64-encoding (standard alphabet,
//! padded) the node's store path, so `L21hZXN0cm8vZDAx` addresses
//! `/maestro/d01`. Callers must treat keys as opaque; decoding is only used
//! to show the path next to a record.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decode a key into the store path it was derived from.
///
/// Returns `None` when the key is not valid base64 or does not decode to
/// UTF-8 text.
pub fn decode_key_path(key: &str) -> Option<String> {
    let bytes = STANDARD.decode(key.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Encode a store path as a key.
pub fn encode_path_key(path: &str) -> String {
    STANDARD.encode(path.as_bytes())
}
