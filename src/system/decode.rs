//! Decoding of captured child output

use std::fmt::Write;

/// Decode process output as UTF-8 without ever failing.
///
/// Valid sequences are kept as-is; every byte that is not part of a valid
/// sequence is written as `\xNN`. The raw bytes stay on the run result, so
/// nothing is lost.
pub fn decode_output(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    let mut decoded = String::with_capacity(bytes.len() + 8);
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
        for byte in chunk.invalid() {
            // Writing into a String cannot fail
            let _ = write!(decoded, "\\x{:02x}", byte);
        }
    }
    tracing::debug!(
        "Escaped undecodable output bytes, bytes: {}",
        bytes.len()
    );
    decoded
}
