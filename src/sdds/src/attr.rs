//! Directive attribute extraction
//!
//! Directive lines carry comma-separated `key=value` attributes:
//!
//! ```text
//! &column name="Foo, Bar", type=string, units=mm, &end
//! ```
//!
//! A quoted value runs to the next double quote and may contain commas. A bare
//! value runs to the next comma, `&end` token or end of line and is trimmed.

const END_TOKEN: &[u8] = b"&end";

/// Extract the value of attribute `key` from a directive line
///
/// Keys match case-insensitively, only at an attribute boundary and never
/// inside a quoted value. Returns `None` when the key is absent or its quoted
/// value is unterminated.
pub fn attribute(line: &str, key: &str) -> Option<String> {
    let value_start = find_key(line, key)?;
    let rest = line[value_start..].trim_start();

    if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some(quoted[..end].to_string());
    }

    let end = bare_value_end(rest.as_bytes());
    Some(rest[..end].trim().to_string())
}

/// Find the byte offset just past `key=`
///
/// A double quote opens a quoted span only directly after `=`; quotes inside a
/// bare value are ordinary characters.
fn find_key(line: &str, key: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let key = key.as_bytes();
    if key.is_empty() {
        return None;
    }

    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'=' {
            i = skip_quoted(bytes, i + 1)?;
            continue;
        }

        if at_boundary(bytes, i) {
            if let Some(value_start) = match_key(bytes, i, key) {
                return Some(value_start);
            }
        }
        i += 1;
    }

    None
}

/// `key` at `i`, optional spaces, then `=`: offset just past the `=`
fn match_key(bytes: &[u8], i: usize, key: &[u8]) -> Option<usize> {
    let key_end = i + key.len();
    if key_end > bytes.len() || !bytes[i..key_end].eq_ignore_ascii_case(key) {
        return None;
    }

    let j = skip_blanks(bytes, key_end);
    (j < bytes.len() && bytes[j] == b'=').then_some(j + 1)
}

/// Offset past a quoted value starting at `start`, or `start` for a bare value
///
/// `None` when the quote is never closed.
fn skip_quoted(bytes: &[u8], start: usize) -> Option<usize> {
    let j = skip_blanks(bytes, start);
    if j >= bytes.len() || bytes[j] != b'"' {
        return Some(start);
    }
    let close = memchr::memchr(b'"', &bytes[j + 1..])?;
    Some(j + 1 + close + 1)
}

fn skip_blanks(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && matches!(bytes[i], b' ' | b'\t') {
        i += 1;
    }
    i
}

/// An attribute key must not continue a longer identifier (`units_name=`)
#[inline]
fn at_boundary(bytes: &[u8], i: usize) -> bool {
    i == 0 || !(bytes[i - 1].is_ascii_alphanumeric() || bytes[i - 1] == b'_')
}

fn bare_value_end(rest: &[u8]) -> usize {
    let comma = memchr::memchr(b',', rest).unwrap_or(rest.len());
    let end_token = rest
        .windows(END_TOKEN.len())
        .position(|w| w.eq_ignore_ascii_case(END_TOKEN))
        .unwrap_or(rest.len());
    comma.min(end_token)
}
