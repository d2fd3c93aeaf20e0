//! Ordinal markers on usage examples
//!
//! Examples arrive as `1. ...`, `例句1：...` or `1: ...`, and models mix
//! the styles (`1. 例句1：...`), so the markers are stripped in sequence.

use regex::Regex;
use std::sync::LazyLock;

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]+\.|例句[0-9]+[:：]|[0-9]+[:：])").expect("valid regex"));

static MARKERS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"^[0-9]+\.\s*").expect("valid regex"),
        Regex::new(r"^例句[0-9]+[:：]\s*").expect("valid regex"),
        Regex::new(r"^[0-9]+[:：]\s*").expect("valid regex"),
    ]
});

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid regex"));

/// True if `line` opens with an example ordinal
pub(crate) fn has_ordinal(line: &str) -> bool {
    ORDINAL.is_match(line)
}

/// Text of an ordinal-marked example line with its markers removed
pub(crate) fn strip_ordinal(line: &str) -> &str {
    MARKERS.iter().fold(line, |rest, marker| match marker.find(rest) {
        Some(m) => &rest[m.end()..],
        None => rest,
    })
}

/// True if `line` looks like a new top-level numbered item (`3. ...`)
pub(crate) fn is_numbered_item(line: &str) -> bool {
    NUMBERED.is_match(line)
}
