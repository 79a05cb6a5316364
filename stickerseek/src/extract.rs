//! Link extraction from raw search payloads.
//!
//! The extractor is a textual scan, not a structural parser: it locates
//! quoted field names and slices out the quoted value that follows each one.
//! The payload produced by the sticker-search service is flat enough for the
//! scan to work, and the narrow contract here means a structured decoder
//! could replace it without touching the rest of the system.

/// Substring a candidate value must contain to count as a sticker link.
pub const STICKER_LINK_PREFIX: &str = "https://giphy.com/stickers/";

/// Field name carrying result links in the search service's payload.
pub const RESULT_LINK_FIELD: &str = "url";

/// Extracts sticker links from a raw payload.
///
/// Scans left to right for occurrences of `"field_name"` (quotes included).
/// For each occurrence the value is taken to be the text between the next
/// quote character after the field name and the quote character after that.
/// A candidate value is kept only if it contains
/// [`STICKER_LINK_PREFIX`]; the field name alone is not trusted, since the
/// payload carries same-named fields whose values are not sticker links.
///
/// The next field-name search starts at the previous candidate's closing
/// quote, and the scan stops as soon as it cannot make forward progress,
/// which here means any lookup finding nothing: every lookup starts at the
/// cursor and each accepted candidate moves the cursor strictly forward.
/// Malformed payloads therefore degrade to an empty or partial sequence;
/// extraction never fails.
///
/// # Known limitation
///
/// Values containing escaped quote characters are not understood: the scan
/// treats the first quote after the value's opening quote as its end, so such
/// a value comes back truncated at the backslash. Downstream consumers rely
/// on this behavior, so it is documented here rather than fixed.
#[must_use]
pub fn extract_links(payload: &str, field_name: &str) -> Vec<String> {
    let needle = format!("\"{field_name}\"");
    let mut links = Vec::new();
    // Closing-quote position of the previous candidate. The next field-name
    // search starts here, not one past it: a closing quote may double as the
    // opening quote of the next occurrence.
    let mut cursor = 0usize;

    loop {
        let Some(field_at) = find_from(payload, &needle, cursor) else {
            break;
        };
        let Some(value_start) = find_from(payload, "\"", field_at + needle.len()) else {
            break;
        };
        let Some(value_end) = find_from(payload, "\"", value_start + 1) else {
            break;
        };

        let candidate = &payload[value_start + 1..value_end];
        cursor = value_end;

        if candidate.contains(STICKER_LINK_PREFIX) {
            links.push(candidate.to_string());
        }
    }

    links
}

/// Finds `needle` in `payload` at or after byte offset `from`.
fn find_from(payload: &str, needle: &str, from: usize) -> Option<usize> {
    payload.get(from..)?.find(needle).map(|at| from + at)
}
