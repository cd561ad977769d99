//! Display-name extraction for CSV sources
//!
//! Derives the name shown in the document title from a URL or file
//! path: `+` decodes to space, percent-escapes are decoded, and the
//! last path segment wins. Inputs with no extractable segment pass
//! through unchanged.

use percent_encoding::percent_decode_str;

/// Extract the display name from a URL or path.
pub fn display_name(source: &str) -> String {
    let decoded = percent_decode_str(&source.replace('+', " "))
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| source.to_string());

    let trimmed = decoded.trim_end_matches(['/', '\\']);
    match trimmed.rsplit(['/', '\\']).next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => decoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment_of_url() {
        assert_eq!(
            display_name("https://example.com/radars/my-radar.csv"),
            "my-radar.csv"
        );
    }

    #[test]
    fn test_plus_and_percent_decoding() {
        assert_eq!(
            display_name("https://example.com/My+Tech%20Radar.csv"),
            "My Tech Radar.csv"
        );
    }

    #[test]
    fn test_local_paths() {
        assert_eq!(display_name("/home/user/data/radar.csv"), "radar.csv");
        assert_eq!(display_name("C:\\data\\radar.csv"), "radar.csv");
        assert_eq!(display_name("radar.csv"), "radar.csv");
    }

    #[test]
    fn test_no_segment_falls_back_to_input() {
        assert_eq!(display_name("///"), "///");
        assert_eq!(display_name(""), "");
    }
}
