//! Word-level text matching used by the scoring and ATS heuristics.

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive `\bphrase\b`: "was" matches "It was done" but not "wasted".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let phrase = phrase.trim().to_lowercase();
    if phrase.is_empty() {
        return false;
    }
    let haystack = text.to_lowercase();
    haystack.match_indices(&phrase).any(|(start, found)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + found.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

pub fn contains_any_phrase<S: AsRef<str>>(text: &str, phrases: &[S]) -> bool {
    phrases.iter().any(|p| contains_phrase(text, p.as_ref()))
}

/// Unanchored `\S+@\S+\.\S+`: some whitespace-free run holds a local part,
/// an `@`, and a domain with a dot that has characters on both sides.
pub fn looks_like_email(text: &str) -> bool {
    text.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}

/// At least `min_digits` digits in a run of phone-ish characters.
pub fn looks_like_phone(text: &str, min_digits: usize) -> bool {
    let mut digits = 0;
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits += 1;
            if digits >= min_digits {
                return true;
            }
        } else if !matches!(c, ' ' | '-' | '(' | ')' | '+' | '.') {
            digits = 0;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_phrase_matches_whole_words_only() {
        assert!(contains_phrase("It was shipped late", "was"));
        assert!(contains_phrase("WAS responsible for hiring", "responsible for"));
        assert!(!contains_phrase("Wasted no time", "was"));
        assert!(!contains_phrase("Responsible, for sure", "responsible for"));
        assert!(!contains_phrase("was_here", "was"));
        assert!(!contains_phrase("Tasks were handled", "handled by"));
        assert!(contains_phrase("Outages handled by me.", "handled by"));
    }

    #[test]
    fn test_empty_phrase_never_matches() {
        assert!(!contains_phrase("anything", "  "));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  contact: ada@mail.example.org  "));
        assert!(looks_like_email("a@b.c"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@.com"));
        assert!(!looks_like_email("ada@example."));
        assert!(!looks_like_email("ada @example.com"));
        assert!(!looks_like_email(""));
    }

    #[test]
    fn test_phone_shape() {
        assert!(looks_like_phone("Call +1 (555) 010-0199", 7));
        assert!(!looks_like_phone("Class of 2019", 7));
    }
}
