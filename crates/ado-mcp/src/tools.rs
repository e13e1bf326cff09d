//! MCP tool handlers — all `#[tool]` methods in a single `#[tool_router]`
//! impl block.

use rmcp::{handler::server::wrapper::Parameters, tool, tool_router};

use crate::params::*;
use crate::server::AdoServer;
use crate::summary;
use ado_core::{schema, validate};
use ado_synth::engine::{SynthesisRequest, synthesize};
use ado_synth::records::{FeatureRecord, build_from_records};

#[tool_router]
impl AdoServer {
    #[tool(
        description = "Process a long meeting transcript or notes to generate ADO work item instructions. Returns JSON with Epic and Task work items, priorities, tags, and templated descriptions."
    )]
    async fn process_meeting_transcript(
        &self,
        Parameters(params): Parameters<ProcessMeetingTranscriptParams>,
    ) -> Result<String, String> {
        let config = self.config.read().await;
        let instructions = synthesize(
            &SynthesisRequest {
                text: &params.transcript,
                project_name: Some("Meeting Transcript Analysis"),
                ..Default::default()
            },
            &config,
        );
        schema::to_json(&instructions).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Generate a complete ADO work item hierarchy from any text input. Optional project_name replaces the default; optional priority_override (Low, Medium, High, Critical; case-insensitive) is applied uniformly, and invalid values are ignored. Empty input yields an empty work item list, not an error."
    )]
    async fn generate_ado_workitems_from_text(
        &self,
        Parameters(params): Parameters<GenerateFromTextParams>,
    ) -> Result<String, String> {
        let config = self.config.read().await;
        let request = SynthesisRequest {
            text: &params.text_input,
            project_name: params
                .project_name
                .as_deref()
                .filter(|name| !name.is_empty()),
            priority_override: params.priority_override.as_deref(),
            features: None,
        };
        let instructions = synthesize(&request, &config);
        schema::to_json(&instructions).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Generate ADO work items from feature records produced by an external diagram/image analysis step. Input is a JSON array of {name, description, priority, is_main_epic, requirements[]} records; the workflow root becomes one Epic and its requirements become sequential Tasks."
    )]
    async fn generate_ado_workitems_from_features(
        &self,
        Parameters(params): Parameters<GenerateFromFeaturesParams>,
    ) -> Result<String, String> {
        let records: Vec<FeatureRecord> = serde_json::from_str(&params.features_json)
            .map_err(|e| format!("cannot process feature records: {e}"))?;

        let config = self.config.read().await;
        let instructions = build_from_records(
            &records,
            params.project_name.as_deref().unwrap_or(""),
            &config,
        );
        schema::to_json(&instructions).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Validate the structure of ADO instructions JSON. Returns {valid, issues[]} with every structural problem itemized (missing fields, unknown labels, parent references that do not resolve to an Epic). Nothing is repaired."
    )]
    async fn validate_ado_structure(
        &self,
        Parameters(params): Parameters<ValidateStructureParams>,
    ) -> Result<String, String> {
        // Not JSON at all is a "cannot process" failure, distinct from an
        // itemized validation verdict
        let value = validate::parse_instructions(&params.instructions_json)
            .map_err(|e| e.to_string())?;

        let issues = validate::validate_instructions(&value);
        let verdict = serde_json::json!({
            "valid": issues.is_empty(),
            "issues": issues,
        });
        serde_json::to_string_pretty(&verdict).map_err(|e| e.to_string())
    }

    #[tool(
        description = "Format ADO instructions JSON into a human-readable Epic/Task summary for review: structure stats, per-Epic task trees with priorities and tags, and the workflow sequence."
    )]
    async fn format_ado_instructions_summary(
        &self,
        Parameters(params): Parameters<FormatSummaryParams>,
    ) -> Result<String, String> {
        let instructions = schema::from_json(&params.instructions_json)
            .map_err(|e| format!("cannot process instructions: {e}"))?;
        Ok(summary::format_summary(
            &instructions,
            "ADO Instructions Summary",
        ))
    }

    #[tool(
        description = "Get the organization context used for work item generation, plus the work item hierarchy and priority level guide."
    )]
    async fn get_organization_context(&self) -> Result<String, String> {
        let config = self.config.read().await;
        let context = serde_json::json!({
            "organization": &config.organization,
            "work_item_hierarchy": {
                "Epic": "Main functionality/feature - parent work item",
                "Task": "Individual implementation steps - child of Epic",
                "User Story": "User-focused requirements - can be child of Epic",
                "Bug": "Defect tracking - standalone or child work item",
            },
            "priority_levels": {
                "Critical": "Urgent items affecting system stability",
                "High": "Important features for core functionality",
                "Medium": "Standard features and enhancements",
                "Low": "Nice-to-have features and minor improvements",
            },
        });
        serde_json::to_string_pretty(&context).map_err(|e| e.to_string())
    }
}

impl AdoServer {
    /// Public accessor for the tool router generated by `#[tool_router]`.
    /// Needed because the macro generates a private method, but `new()` lives in server.rs.
    pub(crate) fn create_tool_router() -> rmcp::handler::server::router::tool::ToolRouter<Self> {
        Self::tool_router()
    }
}
