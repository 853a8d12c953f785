//! Compact timestamp decoding.
//!
//! dat logs carry timestamps as 14 fixed-width digits (`YYYYMMDDHHmmss`).
//! Decoding is a pure formatting transform, not a calendar parser: digit
//! groups are re-joined with dashes and colons, and out-of-range values
//! like month 13 pass through formatted. Anything that is not exactly
//! 14 ASCII digits is returned unchanged.

/// Decode a 14-digit `YYYYMMDDHHmmss` token to `YYYY-MM-DD HH:mm:ss`.
///
/// Tokens that don't match the pattern are passed through unchanged,
/// so callers can always display the result directly.
pub fn decode(token: &str) -> String {
    if token.len() != 14 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return token.to_string();
    }

    format!(
        "{}-{}-{} {}:{}:{}",
        &token[0..4],
        &token[4..6],
        &token[6..8],
        &token[8..10],
        &token[10..12],
        &token[12..14]
    )
}
