//! Extracts two-digit hex byte tokens from raw text.
//!
//! Two lexical forms are recognized: a bare pair of hex digits (`ab`), or a
//! `0x`/`0X`-prefixed run of one or two hex digits (`0xA`, `0Xab`). Every
//! extracted token is normalized to exactly two lowercase digits.
//!
//! Anything that is not part of a token is skipped silently. This leniency
//! is deliberate: hex dumps in the wild carry comments, addresses and stray
//! separators, and the caller reconciles the token *count* downstream (see
//! [`LengthPolicy`](crate::LengthPolicy)). Callers that want validated
//! input use [`tokenize_strict`] instead.

use crate::{HexError, Result};

/// Extract all hex byte tokens from `text`, in source order.
///
/// Source order is significant: it becomes row-major raster order when the
/// tokens are decoded into a grid. Unrecognized bytes are skipped.
///
/// ```
/// use hexpix::tokenize;
///
/// assert_eq!(tokenize("0xA 0Xa 0a"), vec!["0a", "0a", "0a"]);
/// assert_eq!(tokenize("row 3: FF;"), vec!["ff"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        match match_token(bytes, idx) {
            Some((token, consumed)) => {
                tokens.push(token);
                idx += consumed;
            }
            None => idx += 1,
        }
    }
    tokens
}

/// Extract hex byte tokens, rejecting anything that is not a token or a
/// separator (whitespace or commas).
///
/// Same grammar and normalization as [`tokenize`], but an unrecognized byte
/// is an error carrying its offset instead of being skipped.
pub fn tokenize_strict(text: &str) -> Result<Vec<String>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx].is_ascii_whitespace() || bytes[idx] == b',' {
            idx += 1;
            continue;
        }
        match match_token(bytes, idx) {
            Some((token, consumed)) => {
                tokens.push(token);
                idx += consumed;
            }
            None => return Err(HexError::UnexpectedInput { offset: idx }),
        }
    }
    Ok(tokens)
}

/// Match one token starting at `idx`, returning it normalized together with
/// the number of bytes consumed. The prefixed form wins when both apply.
fn match_token(bytes: &[u8], idx: usize) -> Option<(String, usize)> {
    let rest = &bytes[idx..];
    if rest.len() >= 3
        && rest[0] == b'0'
        && (rest[1] == b'x' || rest[1] == b'X')
        && rest[2].is_ascii_hexdigit()
    {
        return match rest.get(3).filter(|b| b.is_ascii_hexdigit()) {
            Some(&lo) => Some((normalize_pair(rest[2], lo), 4)),
            None => Some((normalize_pair(b'0', rest[2]), 3)),
        };
    }
    if rest.len() >= 2 && rest[0].is_ascii_hexdigit() && rest[1].is_ascii_hexdigit() {
        return Some((normalize_pair(rest[0], rest[1]), 2));
    }
    None
}

fn normalize_pair(hi: u8, lo: u8) -> String {
    let mut token = String::with_capacity(2);
    token.push(hi.to_ascii_lowercase() as char);
    token.push(lo.to_ascii_lowercase() as char);
    token
}
