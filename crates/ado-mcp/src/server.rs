//! `AdoServer` struct definition and `ServerHandler` impl.

use ado_core::config::AdoConfig;
use rmcp::{ServerHandler, model::ServerInfo, tool_handler};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The ADO instructions MCP server state.
///
/// The synthesis engine itself is stateless; the only shared state is the
/// loaded configuration carrying the organization context.
#[derive(Clone)]
pub(crate) struct AdoServer {
    pub(crate) config: Arc<RwLock<AdoConfig>>,
    pub(crate) tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl std::fmt::Debug for AdoServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdoServer").finish()
    }
}

impl AdoServer {
    /// Create a new server, loading config from `project_root` if present.
    pub(crate) fn new(project_root: &Path) -> Self {
        let config = AdoConfig::load(project_root).unwrap_or_default();
        Self {
            config: Arc::new(RwLock::new(config)),
            tool_router: Self::create_tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for AdoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "ADO Instructions: turns business input into Azure DevOps work-item \
                 hierarchies (one Epic per initiative, Tasks as implementation steps).\n\n\
                 Tools:\n\
                 - process_meeting_transcript: meeting notes/transcripts → Epic/Task JSON\n\
                 - generate_ado_workitems_from_text: any text → Epic/Task JSON, with optional \
                 project_name and priority_override (Low/Medium/High/Critical)\n\
                 - generate_ado_workitems_from_features: feature records from an external \
                 diagram/image analysis step → single-Epic workflow hierarchy\n\
                 - validate_ado_structure: check instructions JSON, returns itemized issues\n\
                 - format_ado_instructions_summary: human-readable Epic/Task summary for review\n\
                 - get_organization_context: organization profile and work-item guide"
                    .into(),
            ),
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            ..Default::default()
        }
    }
}
