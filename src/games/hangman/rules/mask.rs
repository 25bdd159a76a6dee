//! Masked and revealed word rendering.

/// Renders the full word, characters joined by single spaces.
pub fn revealed(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the word with unguessed characters masked.
///
/// Each character of the word appears in order: the character itself if
/// it is a member of `correct_guesses`, an underscore otherwise, joined
/// by single spaces.
pub fn masked(word: &str, correct_guesses: &[char]) -> String {
    word.chars()
        .map(|c| {
            if correct_guesses.contains(&c) {
                c.to_string()
            } else {
                "_".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revealed_joins_with_spaces() {
        assert_eq!(revealed("freeze"), "f r e e z e");
    }

    #[test]
    fn test_revealed_single_letter() {
        assert_eq!(revealed("a"), "a");
    }

    #[test]
    fn test_revealed_empty_word() {
        assert_eq!(revealed(""), "");
    }

    #[test]
    fn test_masked_without_guesses() {
        assert_eq!(masked("freeze", &[]), "_ _ _ _ _ _");
    }

    #[test]
    fn test_masked_reveals_all_positions_of_a_letter() {
        assert_eq!(masked("freeze", &['e']), "_ _ e e _ e");
    }

    #[test]
    fn test_masked_accumulates() {
        assert_eq!(masked("freeze", &['e', 'r']), "_ r e e _ e");
        assert_eq!(masked("freeze", &['e', 'r', 'f']), "f r e e _ e");
    }

    #[test]
    fn test_masked_fully_guessed_matches_revealed() {
        assert_eq!(masked("freeze", &['f', 'r', 'e', 'z']), revealed("freeze"));
    }
}
