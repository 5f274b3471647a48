//! Locates the `window.IBU_HOTEL` JSON literal inside the landing page HTML.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScrapeError;

/// Global assignment that carries the page's hotel data.
pub const MARKER: &str = "window.IBU_HOTEL";

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>(.*?)</script>").expect("valid regex"));

// Non-greedy up to the first `};`, newlines included.
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)window\.IBU_HOTEL\s*=\s*(\{.*?\});").expect("valid regex")
});

/// Return the raw JSON text assigned to [`MARKER`], unparsed.
///
/// Only the first `<script>` element whose text mentions the marker is
/// considered.
///
/// # Errors
///
/// - [`ScrapeError::NotFound`] if no script element contains the marker.
/// - [`ScrapeError::PatternMismatch`] if that script does not hold a
///   `window.IBU_HOTEL = {...};` assignment.
pub fn locate(html: &str) -> Result<&str, ScrapeError> {
    let script = SCRIPT_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .find(|text| text.contains(MARKER))
        .ok_or(ScrapeError::NotFound { marker: MARKER })?;

    let literal = ASSIGNMENT_RE
        .captures(script)
        .and_then(|cap| cap.get(1))
        .ok_or(ScrapeError::PatternMismatch { marker: MARKER })?;

    tracing::debug!(bytes = literal.len(), "located embedded hotel JSON");
    Ok(literal.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_single_line_assignment() {
        let html = r#"<html><head><script>window.IBU_HOTEL = {"a":1};</script></head></html>"#;
        assert_eq!(locate(html).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn locates_assignment_spanning_newlines() {
        let html = "<script type=\"text/javascript\">\n  var x = 1;\n  window.IBU_HOTEL =\n{\n  \"initData\": {}\n};\n</script>";
        assert_eq!(locate(html).unwrap(), "{\n  \"initData\": {}\n}");
    }

    #[test]
    fn skips_scripts_without_marker() {
        let html = concat!(
            r#"<script>window.OTHER = {"b":2};</script>"#,
            r#"<SCRIPT nonce="x">window.IBU_HOTEL={"c":3};</SCRIPT>"#,
        );
        assert_eq!(locate(html).unwrap(), r#"{"c":3}"#);
    }

    #[test]
    fn stops_at_first_statement_terminator() {
        let html = r#"<script>window.IBU_HOTEL = {"a":{"b":1}}; window.NEXT = {"z":0};</script>"#;
        assert_eq!(locate(html).unwrap(), r#"{"a":{"b":1}}"#);
    }

    #[test]
    fn marker_outside_script_is_not_found() {
        let html = "<html><body><p>window.IBU_HOTEL</p><script>var a = 1;</script></body></html>";
        let err = locate(html).unwrap_err();
        assert!(matches!(err, ScrapeError::NotFound { marker } if marker == MARKER));
        assert_eq!(err.stage(), "locate");
    }

    #[test]
    fn empty_document_is_not_found() {
        assert!(matches!(locate(""), Err(ScrapeError::NotFound { .. })));
    }

    #[test]
    fn marker_without_object_assignment_is_pattern_mismatch() {
        let html = "<script>if (window.IBU_HOTEL) { init(window.IBU_HOTEL) }</script>";
        let err = locate(html).unwrap_err();
        assert!(matches!(err, ScrapeError::PatternMismatch { .. }));
        assert_eq!(err.stage(), "locate");
    }

    #[test]
    fn unterminated_assignment_is_pattern_mismatch() {
        let html = r#"<script>window.IBU_HOTEL = {"a":1}</script>"#;
        assert!(matches!(
            locate(html),
            Err(ScrapeError::PatternMismatch { .. })
        ));
    }
}
