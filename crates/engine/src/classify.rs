//! Line classification: counting lines that are not pure comment lines.
//!
//! Operates on raw text only. Block comments are removed before the text is
//! split into lines, so a span covering several physical lines collapses
//! them. Only line comments that start a trimmed line are excluded; trailing
//! comments after code count with their line.

use regex::Regex;
use std::sync::LazyLock;

/// Extensions sharing `//` and `/* ... */` comment syntax.
const BRACE_FAMILY: &[&str] = &["js", "jsx", "ts", "tsx"];

/// A `/*` span up to the nearest `*/`, or to end of input when unterminated.
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?(\*/|\z)").expect("block comment pattern"));

/// Count the lines of `content` that are not pure comment lines.
///
/// Dispatches on `extension` (no leading dot, matched exactly). Unknown
/// extensions get no comment filtering: the result is the literal
/// newline-split segment count, including the trailing empty segment when
/// the content ends with a newline.
#[must_use]
pub fn count_non_comment_lines(content: &str, extension: &str) -> usize {
    if BRACE_FAMILY.contains(&extension) {
        count_brace_family(content)
    } else if extension == "py" {
        count_hash_lines(content)
    } else {
        content.split('\n').count()
    }
}

fn count_brace_family(content: &str) -> usize {
    let stripped = BLOCK_COMMENT.replace_all(content, "");
    stripped
        .split('\n')
        .filter(|line| !line.trim().starts_with("//"))
        .count()
}

fn count_hash_lines(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| !line.trim().starts_with('#'))
        .count()
}
