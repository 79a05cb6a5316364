//! Payload fixtures shaped like the sticker-search service's responses.
//!
//! The real service returns a large JSON document per page; the extractor
//! only cares about `"url"` fields holding sticker links, so these builders
//! produce the minimal structure that exercises the scan realistically.
//! Each result carries a second `"url"` field with a media address, as the
//! real payloads do, to keep the sticker-link filter honest.

/// Builds a one-page payload whose results link to the given sticker slugs.
#[must_use]
pub fn sticker_payload(slugs: &[&str]) -> String {
    let items: Vec<String> = slugs
        .iter()
        .enumerate()
        .map(|(n, slug)| {
            format!(
                concat!(
                    r#"{{"type":"sticker","id":"id{n}","#,
                    r#""url":"https://giphy.com/stickers/{slug}","#,
                    r#""images":{{"original":{{"url":"https://media.giphy.com/media/{slug}/giphy.gif"}}}}}}"#
                ),
                n = n,
                slug = slug
            )
        })
        .collect();
    format!(
        r#"{{"data":[{}],"pagination":{{"count":{}}},"meta":{{"status":200,"msg":"OK"}}}}"#,
        items.join(","),
        slugs.len()
    )
}

/// Builds a payload with an empty result set, as returned for a page past
/// the end of the service's results.
#[must_use]
pub fn empty_payload() -> String {
    r#"{"data":[],"pagination":{"total_count":0,"count":0,"offset":0},"meta":{"status":200,"msg":"OK"}}"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{extract_links, RESULT_LINK_FIELD};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sticker_payload_extracts_one_link_per_slug() {
        let payload = sticker_payload(&["funny-cat-abc", "sad-cat-def"]);
        let links = extract_links(&payload, RESULT_LINK_FIELD);
        assert_eq!(
            links,
            vec![
                "https://giphy.com/stickers/funny-cat-abc".to_string(),
                "https://giphy.com/stickers/sad-cat-def".to_string(),
            ]
        );
    }

    #[test]
    fn test_media_urls_are_filtered_out() {
        let payload = sticker_payload(&["solo"]);
        assert!(payload.contains("media.giphy.com"));
        assert_eq!(extract_links(&payload, RESULT_LINK_FIELD).len(), 1);
    }

    #[test]
    fn test_empty_payload_extracts_nothing() {
        assert!(extract_links(&empty_payload(), RESULT_LINK_FIELD).is_empty());
    }
}
