// src/util/text.rs

/// First non-empty line of `text`, trimmed and cut to `max_chars` characters.
///
/// Truncated lines end with `...` (counted in `max_chars`).
///
/// # Examples
///
/// ```
/// use notecards::util::text::summary_line;
///
/// let content = "\n  Buy milk  \nand eggs";
/// assert_eq!(summary_line(content, 20), "Buy milk");
/// assert_eq!(summary_line("Lorem ipsum dolor", 8), "Lorem...");
/// ```
pub fn summary_line(text: &str, max_chars: usize) -> String {
    let line = text
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let mut cut: String = line.chars().take(keep).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str("...");
    cut
}
