//! Candidate feature and requirement extraction from free text.

use crate::text;

/// Fixed vocabulary mapping raw keywords to canonical feature labels.
/// Table order is emission order for keywords found anywhere in the text.
const FEATURE_VOCABULARY: &[(&str, &str)] = &[
    ("chatbot", "Chatbot Development"),
    ("bot", "Bot Development"),
    ("chat", "Chat System"),
    ("dashboard", "Dashboard"),
    ("report", "Reporting"),
    ("analytics", "Analytics"),
    ("data pipeline", "Data Pipeline"),
    ("visualization", "Data Visualization"),
    ("api", "API Development"),
    ("integration", "System Integration"),
    ("authentication", "Authentication"),
    ("database", "Database"),
    ("etl", "ETL Pipeline"),
    ("website", "Website Development"),
    ("web app", "Web Application"),
    ("mobile app", "Mobile Application"),
    ("ai", "AI/ML System"),
    ("machine learning", "Machine Learning"),
    ("llm", "LLM Integration"),
];

/// Sentences containing any of these terms are retained verbatim as
/// features even without an action verb.
const TECHNICAL_TERMS: &[&str] = &[
    "database", "llm", "website", "api", "server", "frontend", "backend",
];

/// Keywords an action-bearing sentence is split on to find the feature
/// fragment; the first keyword present wins.
const ACTION_SPLIT_KEYWORDS: &[&str] = &["build", "create", "develop", "implement", "need"];

const REQUIREMENT_KEYWORDS: &[&str] = &["must", "should", "require", "need to", "shall"];

/// Extract an ordered sequence of distinct feature labels from raw text.
///
/// Three sources, in order: canonical labels for vocabulary keywords found
/// anywhere in the text, `"<Action> <Remainder>"` labels for sentences with
/// an action verb or need-phrase, and verbatim sentences mentioning a
/// technical term. Duplicates are dropped, first occurrence kept. Empty or
/// whitespace-only input yields an empty sequence.
pub fn extract_features(raw: &str) -> Vec<String> {
    let normalized = text::normalize(raw);
    if normalized.is_empty() {
        return Vec::new();
    }
    let lower = normalized.to_lowercase();

    let mut features: Vec<String> = Vec::new();

    for (keyword, label) in FEATURE_VOCABULARY {
        if lower.contains(keyword) {
            features.push((*label).to_string());
        }
    }

    for sentence in text::split_sentences(&normalized, &['.', '!', '?']) {
        let sentence_lower = sentence.to_lowercase();

        if let Some(action) = text::extract_action(sentence) {
            for keyword in ACTION_SPLIT_KEYWORDS {
                if let Some(at) = sentence_lower.find(keyword) {
                    let remainder = sentence_lower[at + keyword.len()..].trim();
                    if !remainder.is_empty() {
                        features.push(format!(
                            "{} {}",
                            text::title_case(&action),
                            text::title_case(remainder)
                        ));
                        break;
                    }
                }
            }
        }

        if TECHNICAL_TERMS
            .iter()
            .any(|term| sentence_lower.contains(term))
        {
            features.push(sentence.to_string());
        }
    }

    dedup_preserving_order(features)
}

/// Extract requirement sentences: split on `.` only, keep sentences
/// containing a modal/requirement keyword, order preserved, duplicates kept.
pub fn extract_requirements(raw: &str) -> Vec<String> {
    let normalized = text::normalize(raw);
    text::split_sentences(&normalized, &['.'])
        .into_iter()
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            REQUIREMENT_KEYWORDS
                .iter()
                .any(|keyword| lower.contains(keyword))
        })
        .map(str::to_string)
        .collect()
}

fn dedup_preserving_order(features: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(features.len());
    for feature in features {
        if !unique.contains(&feature) {
            unique.push(feature);
        }
    }
    unique
}
