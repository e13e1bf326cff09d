//! Top-level synthesis entry point: raw text to a complete instruction set.

use crate::{builder, chain, extract};
use ado_core::config::AdoConfig;
use ado_core::model::AdoInstructions;
use tracing::debug;

/// A single synthesis request. Everything beyond `text` is an optional
/// caller override.
#[derive(Debug, Default)]
pub struct SynthesisRequest<'a> {
    pub text: &'a str,
    /// Overrides the configured default project name.
    pub project_name: Option<&'a str>,
    /// Uniform priority override; invalid labels are silently ignored.
    pub priority_override: Option<&'a str>,
    /// Pre-extracted feature labels; skips text extraction when supplied.
    pub features: Option<Vec<String>>,
}

/// Synthesize a complete instruction set from a request.
///
/// Pipeline: normalize → extract features (unless supplied) → detect chain →
/// build hierarchy → apply priority override → assemble with the organization
/// context from config. Never fails on content: unusable text degrades to an
/// empty work-item list.
pub fn synthesize(request: &SynthesisRequest<'_>, config: &AdoConfig) -> AdoInstructions {
    let features = match &request.features {
        Some(features) => features.clone(),
        None => extract::extract_features(request.text),
    };
    let chain_result = chain::detect_chain(request.text);
    debug!(
        features = features.len(),
        is_chain = chain_result.is_chain,
        "synthesizing work items"
    );

    let project_name = request.project_name.unwrap_or("");
    let mut work_items = builder::build_work_items(&features, &chain_result, project_name);
    if let Some(raw) = request.priority_override {
        builder::apply_priority_override(&mut work_items, raw);
    }

    let resolved_project = if project_name.is_empty() {
        config.generation.default_project_name.clone()
    } else {
        project_name.to_string()
    };

    AdoInstructions {
        project_name: resolved_project,
        work_items,
        organization_context: config.organization_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ado_core::model::WorkItemKind;

    #[test]
    fn test_project_name_falls_back_to_config_default() {
        let config = AdoConfig::default();
        let instructions = synthesize(
            &SynthesisRequest {
                text: "We need a dashboard",
                ..Default::default()
            },
            &config,
        );
        assert_eq!(instructions.project_name, "Generated Project");

        let named = synthesize(
            &SynthesisRequest {
                text: "We need a dashboard",
                project_name: Some("Portal"),
                ..Default::default()
            },
            &config,
        );
        assert_eq!(named.project_name, "Portal");
    }

    #[test]
    fn test_supplied_features_skip_extraction() {
        let config = AdoConfig::default();
        let instructions = synthesize(
            &SynthesisRequest {
                text: "",
                features: Some(vec!["Build Alpha".to_string()]),
                ..Default::default()
            },
            &config,
        );
        assert_eq!(instructions.work_items.len(), 1);
        assert_eq!(instructions.work_items[0].kind, WorkItemKind::Epic);
    }

    #[test]
    fn test_organization_context_is_threaded_through() {
        let config = AdoConfig::default();
        let instructions = synthesize(
            &SynthesisRequest {
                text: "anything",
                ..Default::default()
            },
            &config,
        );
        assert_eq!(
            instructions.organization_context,
            config.organization_value()
        );
    }
}
