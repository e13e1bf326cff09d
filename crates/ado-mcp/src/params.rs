//! MCP tool parameter structs — one per tool handler, deserialized from
//! JSON-RPC calls.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `process_meeting_transcript` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct ProcessMeetingTranscriptParams {
    /// Long text from meeting transcripts, notes, or requirements documents
    pub(crate) transcript: String,
}

/// Parameters for the `generate_ado_workitems_from_text` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct GenerateFromTextParams {
    /// Any text input (meeting notes, requirements, user stories, etc.)
    pub(crate) text_input: String,
    /// Optional override for the project name
    pub(crate) project_name: Option<String>,
    /// Optional uniform priority override: Low, Medium, High, or Critical
    /// (case-insensitive). Invalid values are ignored.
    pub(crate) priority_override: Option<String>,
}

/// Parameters for the `generate_ado_workitems_from_features` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct GenerateFromFeaturesParams {
    /// JSON array of feature records from the external analysis step:
    /// [{"name", "description", "priority", "is_main_epic", "requirements":
    /// [{"title", "description", "priority"}]}]
    pub(crate) features_json: String,
    /// Optional override for the project name
    pub(crate) project_name: Option<String>,
}

/// Parameters for the `validate_ado_structure` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct ValidateStructureParams {
    /// JSON string containing ADO instructions to validate
    pub(crate) instructions_json: String,
}

/// Parameters for the `format_ado_instructions_summary` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub(crate) struct FormatSummaryParams {
    /// JSON string containing ADO instructions to summarize
    pub(crate) instructions_json: String,
}
