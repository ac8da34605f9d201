/// Characters that end a sentence when followed by whitespace (or end of text).
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | ';')
}

/// Text around `text[start..end]`, extended at most `max_chars` characters
/// each way and clipped at sentence boundaries. Decimal points (`2.4`) do not
/// count as boundaries. Cost is bounded by `max_chars`, not document length.
pub fn context_window(text: &str, start: usize, end: usize, max_chars: usize) -> &str {
    // Walk left. `right` is the character just to the right of `c`.
    let mut left = start;
    let mut right: Option<char> = text[start..].chars().next();
    for (i, c) in text[..start].char_indices().rev().take(max_chars) {
        if c == '\n' {
            break;
        }
        if is_terminator(c) && right.map_or(true, char::is_whitespace) {
            break;
        }
        left = i;
        right = Some(c);
    }

    // Walk right; a terminator is kept, whatever follows it is not.
    let mut right_end = end;
    for (i, c) in text[end..].char_indices().take(max_chars) {
        if c == '\n' {
            break;
        }
        right_end = end + i + c.len_utf8();
        if is_terminator(c) && text[right_end..].chars().next().map_or(true, char::is_whitespace) {
            break;
        }
    }

    text[left..right_end].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_around(text: &str, needle: &str, max: usize) -> String {
        let start = text.find(needle).unwrap();
        context_window(text, start, start + needle.len(), max).to_string()
    }

    #[test]
    fn whole_short_sentence() {
        let text = "pain treatment at 2.4 kHz";
        assert_eq!(window_around(text, "2.4 kHz", 80), text);
    }

    #[test]
    fn clipped_at_previous_sentence() {
        let text = "This device treats pain. The carrier runs at 40 kHz for coupling.";
        assert_eq!(
            window_around(text, "40 kHz", 80),
            "The carrier runs at 40 kHz for coupling."
        );
    }

    #[test]
    fn clipped_at_next_sentence() {
        let text = "Stimulation at 100 Hz is typical. Our cure kills cancer.";
        assert_eq!(
            window_around(text, "100 Hz", 80),
            "Stimulation at 100 Hz is typical."
        );
    }

    #[test]
    fn decimal_point_is_not_a_boundary() {
        let text = "Version 2.4 of the pain relief unit runs at 300 Hz";
        assert_eq!(window_around(text, "300 Hz", 80), text);
    }

    #[test]
    fn newline_is_a_boundary() {
        let text = "heading about pain therapy\nrated 500 Hz output";
        assert_eq!(window_around(text, "500 Hz", 80), "rated 500 Hz output");
    }

    #[test]
    fn limited_by_char_budget() {
        let text = "aaaaaaaaaa 50 Hz bbbbbbbbbb";
        assert_eq!(window_around(text, "50 Hz", 3), "aa 50 Hz bb");
    }

    #[test]
    fn multibyte_text_is_safe() {
        let text = "Gerät für Schmerztherapie – läuft bei 300 Hz – geprüft";
        let w = window_around(text, "300 Hz", 10);
        assert!(w.contains("300 Hz"));
    }
}
