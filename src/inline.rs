/// Inline formatting applied to heading, list item and paragraph content
use md5::{Digest, Md5};

/// Apply the four inline rules, in order, to one piece of content.
///
/// Each rule runs a single left-to-right pass over the output of the rule
/// before it:
///
/// 1. `**text**` becomes `<b>text</b>`
/// 2. `__text__` becomes `<em>text</em>`
/// 3. `((text))` becomes `text` without any `c` or `C`
/// 4. `[[text]]` becomes the lowercase hex MD5 digest of `text`
///
/// Delimiters without a partner are left untouched.
pub fn format_inline(text: &str) -> String {
    let text = replace_delimited(text, "**", "**", |inner| format!("<b>{}</b>", inner));
    let text = replace_delimited(&text, "__", "__", |inner| format!("<em>{}</em>", inner));
    let text = replace_delimited(&text, "((", "))", strip_c);
    replace_delimited(&text, "[[", "]]", md5_hex)
}

/// Replace every `open`..`close` span in `text` with `transform(inner)`.
///
/// Matching is non-greedy: an opening delimiter pairs with the first closing
/// delimiter after at least one character of content. Scanning resumes after
/// the closing delimiter, so replaced output is never rescanned. When no
/// closing delimiter follows, the remainder is copied verbatim.
pub fn replace_delimited<F>(text: &str, open: &str, close: &str, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open_pos) = rest.find(open) {
        let content_start = open_pos + open.len();

        // The inner span must hold at least one character
        let Some(first) = rest[content_start..].chars().next() else {
            break;
        };
        let search_from = content_start + first.len_utf8();

        let Some(close_offset) = rest[search_from..].find(close) else {
            break;
        };
        let content_end = search_from + close_offset;

        result.push_str(&rest[..open_pos]);
        result.push_str(&transform(&rest[content_start..content_end]));
        rest = &rest[content_end + close.len()..];
    }

    result.push_str(rest);
    result
}

fn strip_c(text: &str) -> String {
    text.chars().filter(|&c| c != 'c' && c != 'C').collect()
}

fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(format_inline("Hello world"), "Hello world");
        assert_eq!(format_inline(""), "");
    }

    #[test]
    fn test_bold() {
        assert_eq!(format_inline("**bold**"), "<b>bold</b>");
        assert_eq!(
            format_inline("a **b** c **d**"),
            "a <b>b</b> c <b>d</b>"
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(format_inline("**a**b**c**"), "<b>a</b>b<b>c</b>");
        assert_eq!(format_inline("***a**"), "<b>*a</b>");
    }

    #[test]
    fn test_unmatched_delimiters_are_literal() {
        assert_eq!(format_inline("**open"), "**open");
        assert_eq!(format_inline("a **b** **c"), "a <b>b</b> **c");
        assert_eq!(format_inline("__x"), "__x");
        assert_eq!(format_inline("((x"), "((x");
        assert_eq!(format_inline("[[x"), "[[x");
    }

    #[test]
    fn test_empty_span_is_literal() {
        assert_eq!(format_inline("****"), "****");
        assert_eq!(format_inline("[[]]"), "[[]]");
        assert_eq!(format_inline("(())"), "(())");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_inline("__it__"), "<em>it</em>");
        assert_eq!(
            format_inline("**b** and __i__"),
            "<b>b</b> and <em>i</em>"
        );
    }

    #[test]
    fn test_strip_c() {
        assert_eq!(format_inline("((coffee))"), "offee");
        assert_eq!(format_inline("((Chicago))"), "hiago");
        assert_eq!(format_inline("I ((love)) ((Cake))"), "I love ake");
    }

    #[test]
    fn test_md5() {
        assert_eq!(
            format_inline("[[abc]]"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            format_inline("x [[Hello]] y"),
            "x 8b1a9953c4611296a827abf8c47804d7 y"
        );
    }

    #[test]
    fn test_rules_cascade_in_order() {
        // Bold runs first, so the digest covers the generated tag
        assert_eq!(
            format_inline("[[**x**]]"),
            "191d0845e70bcc5f5e6a98cc2bb13e95"
        );
        // Stripping runs on the output of bold
        assert_eq!(format_inline("((**cocoa**))"), "<b>ooa</b>");
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(format_inline("**é**"), "<b>é</b>");
        assert_eq!(format_inline("((çc))"), "ç");
    }

    #[test]
    fn test_replace_delimited_custom_transform() {
        let out = replace_delimited("<x> and <yy>", "<", ">", |s| s.len().to_string());
        assert_eq!(out, "1 and 2");
    }
}
