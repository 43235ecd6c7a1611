//! Text manipulation utilities

/// Capitalizes the first character of a string
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Shorten `s` to at most `max` characters, ending with an ellipsis when cut.
/// Newlines are flattened to spaces so table cells stay on one line.
pub fn truncate_chars(s: &str, max: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Escape `|` so text can sit inside a Markdown table cell.
pub fn escape_markdown_cell(s: &str) -> String {
    s.replace('|', "\\|")
}
