//! Dependency-chain detection: explicit sequence connectives first, then a
//! canonical-order co-occurrence fallback.
//!
//! Rules are evaluated in a fixed order and the first match wins. The
//! fallback imposes a deterministic technical build order (data layer →
//! interface → delivery layer) on co-occurring terms regardless of the order
//! the text states them in; this is a best-effort heuristic, not a semantic
//! inference.

use crate::text;
use regex::Regex;
use std::sync::OnceLock;

/// Result of scanning text for a sequential dependency chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyChainResult {
    pub is_chain: bool,
    /// Synthesized Epic label, e.g. "Database to Frontend Workflow".
    pub root_concept: String,
    /// Ordered steps, each seeding one Task title.
    pub steps: Vec<String>,
}

const WORKFLOW_TERMS: &[&str] = &["database", "website", "frontend", "backend", "api", "server"];

/// Canonical precedence for co-occurring workflow terms. Found terms keep
/// this relative order, not their order of appearance in the text.
const CANONICAL_ORDER: &[&str] = &["database", "api", "server", "backend", "frontend", "website"];

/// Leading tokens stripped from captured connective groups to reduce them to
/// their concept ("build a database" → "database").
const FILLER_TOKENS: &[&str] = &[
    "build",
    "create",
    "develop",
    "implement",
    "setup",
    "configure",
    "design",
    "deploy",
    "a",
    "an",
    "the",
];

/// The five three-node connective patterns, in fixed precedence order:
/// arrow glyph, ASCII arrow, "to", "then", "leads to".
fn connective_patterns() -> &'static [Regex; 5] {
    static PATTERNS: OnceLock<[Regex; 5]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"([a-z][a-z\s]+?)\s*→\s*([a-z][a-z\s]+?)\s*→\s*([a-z][a-z\s]+)").unwrap(),
            Regex::new(r"([a-z][a-z\s]+?)\s*->\s*([a-z][a-z\s]+?)\s*->\s*([a-z][a-z\s]+)").unwrap(),
            Regex::new(r"([a-z][a-z\s]+?)\s+to\s+([a-z][a-z\s]+?)\s+to\s+([a-z][a-z\s]+)").unwrap(),
            Regex::new(r"([a-z][a-z\s]+?)\s+then\s+([a-z][a-z\s]+?)\s+then\s+([a-z][a-z\s]+)")
                .unwrap(),
            Regex::new(
                r"([a-z][a-z\s]+?)\s+leads\s+to\s+([a-z][a-z\s]+?)\s+leads\s+to\s+([a-z][a-z\s]+)",
            )
            .unwrap(),
        ]
    })
}

/// Detect whether text describes a sequential dependency chain.
///
/// Rule 1 scans for an explicit three-node connective; on the first match
/// the captured groups become the steps and the root concept is
/// `"<first> to <last> Workflow"`. Rule 2 falls back to workflow-term
/// co-occurrence reordered canonically, with root `"<first> to <last>
/// System"`. Otherwise no chain.
pub fn detect_chain(raw: &str) -> DependencyChainResult {
    let prepared = prepare(raw);

    for pattern in connective_patterns() {
        if let Some(caps) = pattern.captures(&prepared) {
            let steps: Vec<String> = (1..=3)
                .map(|group| text::title_case(strip_filler(caps[group].trim())))
                .collect();
            return DependencyChainResult {
                root_concept: format!("{} to {} Workflow", steps[0], steps[2]),
                steps,
                is_chain: true,
            };
        }
    }

    let found: Vec<&str> = WORKFLOW_TERMS
        .iter()
        .copied()
        .filter(|term| prepared.contains(term))
        .collect();
    if found.len() >= 2 {
        let ordered: Vec<String> = CANONICAL_ORDER
            .iter()
            .filter(|term| found.contains(term))
            .map(|term| text::title_case(term))
            .collect();
        if ordered.len() >= 2 {
            return DependencyChainResult {
                root_concept: format!(
                    "{} to {} System",
                    ordered[0],
                    ordered[ordered.len() - 1]
                ),
                steps: ordered,
                is_chain: true,
            };
        }
    }

    DependencyChainResult::default()
}

/// Lowercase and blank sentence punctuation so connectives spanning sentence
/// boundaries stay visible ("Build a database. Then build a website." keeps
/// its "then" link).
fn prepare(raw: &str) -> String {
    let lowered = text::normalize(raw).to_lowercase();
    let blanked: String = lowered
        .chars()
        .map(|c| {
            if matches!(c, '.' | '!' | '?' | ',' | ';') {
                ' '
            } else {
                c
            }
        })
        .collect();
    text::normalize(&blanked)
}

/// Drop leading filler tokens (action verbs and articles) from a captured
/// group. A group that would strip to nothing keeps its trimmed form.
fn strip_filler(group: &str) -> &str {
    let mut rest = group.trim();
    loop {
        let Some((first, tail)) = rest.split_once(' ') else {
            break;
        };
        if FILLER_TOKENS.contains(&first) {
            rest = tail.trim_start();
        } else {
            break;
        }
    }
    // "X leads to Y leads to Z" is caught by the bare "to" rule first,
    // leaving a trailing "leads" remnant in the captured groups
    if let Some(head) = rest.strip_suffix(" leads") {
        rest = head.trim_end();
    }
    if rest.is_empty() { group.trim() } else { rest }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_glyph_chain() {
        let result = detect_chain("design → code → test");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Design", "Code", "Test"]);
        assert_eq!(result.root_concept, "Design to Test Workflow");
    }

    #[test]
    fn test_ascii_arrow_chain() {
        let result = detect_chain("ingest -> transform -> publish");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Ingest", "Transform", "Publish"]);
    }

    #[test]
    fn test_to_connective_chain() {
        let result = detect_chain("signup to verification to activation");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Signup", "Verification", "Activation"]);
        assert_eq!(result.root_concept, "Signup to Activation Workflow");
    }

    #[test]
    fn test_then_chain_across_sentences() {
        let result = detect_chain("Build a database. Then build a website. Then build a frontend.");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Database", "Website", "Frontend"]);
        assert_eq!(result.root_concept, "Database to Frontend Workflow");
    }

    #[test]
    fn test_leads_to_chain() {
        let result = detect_chain("planning leads to execution leads to review");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Planning", "Execution", "Review"]);
    }

    #[test]
    fn test_arrow_takes_precedence_over_then() {
        // Both an arrow chain and a "then" chain are present; the arrow
        // pattern is evaluated first and wins.
        let result = detect_chain("extract → load → report and plan then act then verify");
        assert!(result.is_chain);
        assert_eq!(result.steps[0], "Extract");
    }

    #[test]
    fn test_detection_is_deterministic() {
        let text = "api then database then server";
        assert_eq!(detect_chain(text), detect_chain(text));
    }

    #[test]
    fn test_cooccurrence_fallback_uses_canonical_order() {
        let a = detect_chain("website database api");
        let b = detect_chain("api database website");
        assert!(a.is_chain);
        assert_eq!(a.steps, vec!["Database", "Api", "Website"]);
        assert_eq!(a, b);
        assert_eq!(a.root_concept, "Database to Website System");
    }

    #[test]
    fn test_cooccurrence_two_terms() {
        let result = detect_chain("We need a database and an api for the backend.");
        assert!(result.is_chain);
        assert_eq!(result.steps, vec!["Database", "Api", "Backend"]);
        assert_eq!(result.root_concept, "Database to Backend System");
    }

    #[test]
    fn test_single_term_is_not_a_chain() {
        let result = detect_chain("Just a database here");
        assert!(!result.is_chain);
        assert!(result.steps.is_empty());
        assert!(result.root_concept.is_empty());
    }

    #[test]
    fn test_empty_input_is_not_a_chain() {
        assert_eq!(detect_chain(""), DependencyChainResult::default());
    }

    #[test]
    fn test_filler_stripping_keeps_bare_verbs() {
        // A group that is nothing but a stripped token keeps its trimmed form
        assert_eq!(strip_filler("build"), "build");
        assert_eq!(strip_filler("build a database"), "database");
        assert_eq!(strip_filler("the admin portal"), "admin portal");
    }
}
