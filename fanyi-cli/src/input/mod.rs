//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Split `text` into inputs: one per non-blank line, or the whole text
pub fn split_inputs(text: &str, per_line: bool) -> Vec<String> {
    if per_line {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![text.trim().to_string()]
    }
}
