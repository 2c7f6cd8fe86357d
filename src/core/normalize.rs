//! Markup normalizer: strips lightweight Markdown decorations from AI output.
//!
//! Pure text-to-text transform. Emphasis, headings, inline code, and links
//! keep their inner text; fenced code blocks are deleted outright, contents
//! included. The pass order matters: bold before italic so `**x**` is not
//! consumed as two italic spans, fences before inline code so a fence's
//! backticks are not eaten one at a time.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").expect("valid regex"));
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s+").expect("valid regex"));
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").expect("valid regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid regex"));

/// Strip Markdown decorations from `text` and trim the result.
///
/// Non-greedy matching throughout, so adjacent spans never merge into one
/// oversized match. Unpaired delimiters are left as-is. Total over all
/// inputs; the empty string maps to the empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    // Fenced blocks are removed with their contents, unlike every other pass.
    let text = CODE_FENCE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = LINK.replace_all(&text, "$1");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn strips_bold_keeping_inner_text() {
        assert_eq!(normalize("a **bold** word"), "a bold word");
    }

    #[test]
    fn strips_star_italic() {
        assert_eq!(normalize("an *italic* word"), "an italic word");
    }

    #[test]
    fn strips_underscore_italic() {
        assert_eq!(normalize("an _italic_ word"), "an italic word");
    }

    #[test]
    fn adjacent_bold_spans_stay_separate() {
        // Non-greedy: two pairs, not one span swallowing the middle.
        assert_eq!(normalize("**a** and **b**"), "a and b");
    }

    #[test]
    fn unmatched_delimiter_left_alone() {
        assert_eq!(normalize("a * lonely star"), "a * lonely star");
        assert_eq!(normalize("just one `tick"), "just one `tick");
    }

    #[test]
    fn dangling_double_star_collapses_to_empty_pair() {
        // `*(.*?)*` pairs the two adjacent stars with an empty span.
        assert_eq!(normalize("half **bold"), "half bold");
    }

    #[test]
    fn strips_heading_marker_per_line() {
        assert_eq!(
            normalize("# Title\nbody\n## Sub\nmore"),
            "Title\nbody\nSub\nmore"
        );
    }

    #[test]
    fn heading_marker_mid_line_untouched() {
        assert_eq!(normalize("see issue #42 here"), "see issue #42 here");
    }

    #[test]
    fn removes_fenced_block_including_contents() {
        assert_eq!(normalize("before ```print(1)``` after"), "before  after");
    }

    #[test]
    fn removes_multiline_fenced_block() {
        let input = "intro\n```\nlet x = 1;\nlet y = 2;\n```\noutro";
        assert_eq!(normalize(input), "intro\n\noutro");
    }

    #[test]
    fn strips_inline_code_ticks() {
        assert_eq!(normalize("use `cargo build` here"), "use cargo build here");
    }

    #[test]
    fn strips_link_keeping_label() {
        assert_eq!(
            normalize("read [the docs](https://example.com) first"),
            "read the docs first"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize("  **x**  \n"), "x");
    }

    #[test]
    fn idempotent_once_markup_free() {
        let once = normalize("**a** `b` [c](http://d) \n# e");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn vietnamese_bold_and_link() {
        assert_eq!(
            normalize("Đây là **kết quả** của bạn. Xem [chi tiết](http://x.com)."),
            "Đây là kết quả của bạn. Xem chi tiết."
        );
    }

    #[test]
    fn vietnamese_heading_and_inline_code() {
        assert_eq!(
            normalize("### Tiêu đề\nNội dung `code` ở đây."),
            "Tiêu đề\nNội dung code ở đây."
        );
    }

    #[test]
    fn mixed_markup_single_pass() {
        let input = "## Kết quả\n**Xong!** Chạy `make` rồi xem [log](http://x/y).";
        assert_eq!(normalize(input), "Kết quả\nXong! Chạy make rồi xem log.");
    }
}
