//! Text normalization and sentence-level helpers shared by the extractors.

use regex::Regex;
use std::sync::OnceLock;

/// Collapse whitespace runs to single spaces, unify line endings, and trim.
/// Idempotent: normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-case each whitespace-separated word: first letter uppercased, the
/// rest lowercased.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split text into trimmed, non-empty sentences on the given terminators.
pub fn split_sentences<'a>(text: &'a str, terminators: &[char]) -> Vec<&'a str> {
    text.split(|c: char| terminators.contains(&c))
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Extract the action word from a sentence, if any.
///
/// Matches, in order: direct action verbs, need-phrases ("want to build"
/// yields "build"), then secondary verbs. The first matching pattern wins;
/// matching is case-insensitive.
pub fn extract_action(sentence: &str) -> Option<String> {
    static DIRECT: OnceLock<Regex> = OnceLock::new();
    static NEED: OnceLock<Regex> = OnceLock::new();
    static SECONDARY: OnceLock<Regex> = OnceLock::new();

    let direct = DIRECT.get_or_init(|| {
        Regex::new(r"\b(build|create|develop|implement|setup|configure)\b").unwrap()
    });
    let need = NEED.get_or_init(|| Regex::new(r"\b(want to|need to|should|must)\s+(\w+)").unwrap());
    let secondary =
        SECONDARY.get_or_init(|| Regex::new(r"\b(design|analyze|test|deploy|monitor)\b").unwrap());

    let lower = sentence.to_lowercase();
    if let Some(caps) = direct.captures(&lower) {
        return Some(caps[1].to_string());
    }
    if let Some(caps) = need.captures(&lower) {
        // The action is the word after the need-phrase
        return Some(caps[2].to_string());
    }
    if let Some(caps) = secondary.captures(&lower) {
        return Some(caps[1].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\r\n b\t\tc \r d  "), "a b c d");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("We   need\na database.\r\nAlso an API!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("a database"), "A Database");
        assert_eq!(title_case("USER SIGNUP flow"), "User Signup Flow");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One. Two! Three? ", &['.', '!', '?']);
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_extract_action_direct_verb() {
        assert_eq!(
            extract_action("We will build a chatbot"),
            Some("build".to_string())
        );
        assert_eq!(
            extract_action("Configure the pipeline"),
            Some("configure".to_string())
        );
    }

    #[test]
    fn test_extract_action_need_phrase() {
        assert_eq!(
            extract_action("We want to deploy this soon"),
            Some("deploy".to_string())
        );
        assert_eq!(
            extract_action("The team should review everything"),
            Some("review".to_string())
        );
    }

    #[test]
    fn test_extract_action_none() {
        assert_eq!(extract_action("The weather is nice today"), None);
    }
}
