use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Shortest non-empty prefix followed by one uppercase ASCII letter.
static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.+?)([A-Z])").expect("camel boundary pattern is valid"));

/// Convert every camelCase boundary in a single line to snake_case.
///
/// Each match lower-cases the characters since the previous match and joins
/// them to the lower-cased uppercase letter with `_`. Text after the last
/// match is left alone, so an uppercase letter with nothing before it
/// (start of line, or right after a previous match) stays as it is.
pub fn snake_line(line: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(line, |caps: &Captures| {
            format!(
                "{}_{}",
                caps[1].to_lowercase(),
                caps[2].to_ascii_lowercase()
            )
        })
        .into_owned()
}

/// Rewrite each line independently, keeping count and order.
pub fn snake_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(snake_line).collect()
}

/// Rewrite a whole document line by line.
/// Lines are rejoined with `\n`; a trailing newline is kept if the input had one.
pub fn snake_document(text: &str) -> String {
    let mut out = snake_lines(text.lines()).join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}
