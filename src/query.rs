//! Query-string extraction.
//!
//! Turns a URL query string into a map of argument names to values. The
//! caller passes the search string explicitly rather than this module
//! reading any ambient location state.
use std::collections::HashMap;

/// Parses a query string (with or without the leading `?`) into a map.
///
/// Couples split on `&`; within a couple the first `=` separates key from
/// value, and a couple with no `=` maps the whole key to the empty string.
/// Keys and values are percent-decoded; `+` is left as-is, and malformed
/// escapes or escapes that decode to invalid UTF-8 (such as `%ff`) are
/// kept in their original text.
pub fn query_arguments(search: &str) -> HashMap<String, String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut args = HashMap::new();

    if search.is_empty() {
        return args;
    }

    for couple in search.split('&') {
        if couple.is_empty() {
            continue;
        }
        let (key, value) = match couple.split_once('=') {
            Some((key, value)) => (key, value),
            None => (couple, ""),
        };
        args.insert(percent_decode(key), percent_decode(value));
    }

    args
}

fn percent_decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let (run_len, decoded) = decode_escape_run(rest.as_bytes());
        if run_len == 0 {
            // No well-formed escape here; the '%' stands for itself.
            out.push('%');
            rest = &rest[1..];
            continue;
        }

        match std::str::from_utf8(&decoded) {
            Ok(text) => out.push_str(text),
            Err(e) => {
                // Decode the valid prefix; the escapes behind the invalid
                // bytes stay in their original text. Each decoded byte came
                // from exactly three input bytes.
                let valid = e.valid_up_to();
                out.push_str(std::str::from_utf8(&decoded[..valid]).unwrap_or(""));
                out.push_str(&rest[valid * 3..run_len]);
            }
        }
        rest = &rest[run_len..];
    }

    out.push_str(rest);
    out
}

/// Consumes a run of consecutive `%XX` escapes from the front of `bytes`,
/// returning how many input bytes the run spans and the decoded bytes.
fn decode_escape_run(bytes: &[u8]) -> (usize, Vec<u8>) {
    let mut i = 0;
    let mut decoded = Vec::new();

    while i + 2 < bytes.len() && bytes[i] == b'%' {
        let hi = (bytes[i + 1] as char).to_digit(16);
        let lo = (bytes[i + 2] as char).to_digit(16);
        match (hi, lo) {
            (Some(hi), Some(lo)) => {
                decoded.push((hi * 16 + lo) as u8);
                i += 3;
            }
            _ => break,
        }
    }

    (i, decoded)
}
