/// Whether a character is stripped from user text (C0 and C1 control ranges, DEL included)
fn is_stripped(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}')
}

/// Remove control characters, then trim surrounding whitespace
pub fn sanitize_text(value: &str) -> String {
    let cleaned: String = value.chars().filter(|c| !is_stripped(*c)).collect();
    cleaned.trim().to_string()
}

/// Keep at most `max_chars` characters, never splitting one
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_controls_and_trims() {
        assert_eq!(sanitize_text("  Write\u{0007} report\n "), "Write report");
        assert_eq!(sanitize_text("\u{009F}tab\tbed"), "tabbed");
        assert_eq!(sanitize_text("   "), "");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_text(" Привет мир "), "Привет мир");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("ab", 3), "ab");
        // Multi-byte characters count once
        assert_eq!(truncate_chars("ёжик", 2), "ёж");
    }
}
