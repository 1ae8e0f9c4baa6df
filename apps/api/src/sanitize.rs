//! Free-text sanitization applied to every candidate field before it is
//! stored or forwarded to the analysis service.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything shaped like an HTML/XML tag.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

/// Everything outside the allow-list: word characters, whitespace, `@`, `.`, `-`.
static DISALLOWED_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s@.\-]").expect("allow-list pattern is a valid regex"));

/// Strips markup, then drops every character outside the allow-list.
///
/// Empty input is returned as-is. The result never contains `<` or `>`, so a
/// second pass cannot find new tags: `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let without_tags = TAG_PATTERN.replace_all(text, "");
    DISALLOWED_PATTERN.replace_all(&without_tags, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    static ALLOWED_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\s@.\-]*$").unwrap());

    fn is_clean(text: &str) -> bool {
        ALLOWED_ONLY.is_match(text) && !TAG_PATTERN.is_match(text)
    }

    #[test]
    fn test_empty_input_is_unchanged() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_strips_tags_and_punctuation() {
        assert_eq!(sanitize("Go <b>experience</b>!!"), "Go experience");
    }

    #[test]
    fn test_keeps_email_characters() {
        assert_eq!(sanitize("ana.silva-dev@mail.com"), "ana.silva-dev@mail.com");
    }

    #[test]
    fn test_script_tag_content_markers_removed() {
        let out = sanitize("<script>alert('x')</script>Rust");
        assert_eq!(out, "alertxRust");
    }

    #[test]
    fn test_unclosed_angle_bracket_is_dropped() {
        assert_eq!(sanitize("a < b"), "a  b");
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(sanitize("João Conceição"), "João Conceição");
    }

    #[test]
    fn test_output_only_contains_allowed_characters() {
        let inputs = [
            "C++ & C#; {json}: [1,2] (ok)",
            "<<nested>> <a href=\"x\">link</a> 100%",
            "line1\nline2\ttab $$$ ~`^|\\/",
            "résumé — “quoted” ‘text’ …",
        ];
        for input in inputs {
            let out = sanitize(input);
            assert!(is_clean(&out), "unexpected content in {out:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Go <b>experience</b>!!",
            "<<b>>bold<</b>>",
            "plain text",
            "a<b",
            "",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_output_is_clean(input in any::<String>()) {
            prop_assert!(is_clean(&sanitize(&input)));
        }

        #[test]
        fn prop_markup_heavy_output_is_clean(input in "[<>/a-zA-Z0-9 !@.\\-\"'=]{0,64}") {
            let out = sanitize(&input);
            prop_assert!(is_clean(&out));
            prop_assert!(!out.contains('<') && !out.contains('>'));
        }

        #[test]
        fn prop_idempotent(input in any::<String>()) {
            let once = sanitize(&input);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn prop_allowed_text_is_untouched(input in "[a-zA-Z0-9_ @.\\-]{0,64}") {
            prop_assert_eq!(sanitize(&input), input);
        }
    }
}
