//! Templated multi-section descriptions keyed by requirement category.

/// Requirement category driving description templates and extra tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Database,
    LlmIntegration,
    Frontend,
    Api,
    Generic,
}

impl Category {
    /// Detect the category of a requirement or step. Case-insensitive
    /// substring match, first rule wins.
    pub fn detect(fragment: &str) -> Self {
        let lower = fragment.to_lowercase();
        if lower.contains("database") {
            Self::Database
        } else if lower.contains("llm") || lower.contains("ai") {
            Self::LlmIntegration
        } else if lower.contains("website") || lower.contains("frontend") {
            Self::Frontend
        } else if lower.contains("api") {
            Self::Api
        } else {
            Self::Generic
        }
    }

    /// Extra tags contributed by this category.
    pub fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Database => &["database", "backend", "data"],
            Self::LlmIntegration => &["ai", "llm", "integration"],
            Self::Frontend => &["frontend", "ui", "web"],
            Self::Api => &["api", "backend", "integration"],
            Self::Generic => &[],
        }
    }
}

/// Epic overview description: fixed sections around the verbatim feature.
pub fn epic_description(feature: &str) -> String {
    format!(
        "## Epic Overview\n\
         {feature}\n\
         \n\
         ## Business Value\n\
         This epic delivers core functionality that aligns with our organization's focus on innovative technology solutions and digital transformation.\n\
         \n\
         ## Acceptance Criteria\n\
         - [ ] All related features are implemented and tested\n\
         - [ ] Solution meets performance and security requirements\n\
         - [ ] Documentation is complete and up-to-date\n\
         - [ ] User acceptance testing is completed successfully\n\
         \n\
         ## Dependencies\n\
         - Project infrastructure setup\n\
         - Development environment configuration\n\
         - Required third-party integrations"
    )
}

/// Task description: Task Description (verbatim input), category-specific
/// Technical Requirements and Acceptance Criteria, and the fixed Definition
/// of Done.
pub fn task_description(requirement: &str, category: Category) -> String {
    let (technical, acceptance) = category_sections(category);
    format!(
        "## Task Description\n\
         {requirement}\n\
         \n\
         ## Technical Requirements\n\
         {technical}\n\
         \n\
         ## Acceptance Criteria\n\
         {acceptance}\n\
         \n\
         ## Definition of Done\n\
         {}",
        definition_of_done(category)
    )
}

fn category_sections(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Database => (
            "- Choose appropriate database technology (SQL Server, PostgreSQL, MongoDB, etc.)\n\
             - Design database schema and relationships\n\
             - Implement connection pooling and configuration\n\
             - Set up database migrations and versioning\n\
             - Configure backup and recovery procedures",
            "- [ ] Database is provisioned and accessible\n\
             - [ ] Schema is implemented with proper relationships\n\
             - [ ] Connection strings are configured securely\n\
             - [ ] Basic CRUD operations are tested\n\
             - [ ] Performance benchmarks are established",
        ),
        Category::LlmIntegration => (
            "- Select appropriate LLM provider (OpenAI, Azure OpenAI, Anthropic, etc.)\n\
             - Implement API integration and authentication\n\
             - Design prompt templates and conversation flow\n\
             - Set up rate limiting and error handling\n\
             - Implement response parsing and validation",
            "- [ ] LLM integration is functional and tested\n\
             - [ ] API keys are securely managed\n\
             - [ ] Conversation flow is implemented\n\
             - [ ] Error handling covers edge cases\n\
             - [ ] Response times meet performance requirements",
        ),
        Category::Frontend => (
            "- Choose frontend framework (React, Angular, Vue.js, etc.)\n\
             - Design responsive UI components\n\
             - Implement routing and navigation\n\
             - Set up state management\n\
             - Configure build and deployment pipeline",
            "- [ ] Website is responsive across devices\n\
             - [ ] All core pages are implemented\n\
             - [ ] Navigation is intuitive and functional\n\
             - [ ] Performance scores meet standards\n\
             - [ ] Accessibility guidelines are followed",
        ),
        Category::Api | Category::Generic => (
            "- Analyze and define specific technical approach\n\
             - Identify required technologies and dependencies\n\
             - Design implementation strategy\n\
             - Consider integration points and dependencies",
            "- [ ] Requirements are clearly defined\n\
             - [ ] Technical approach is documented\n\
             - [ ] Implementation is complete and tested\n\
             - [ ] Integration points are verified",
        ),
    }
}

/// Fixed three-item checklist; data-sensitive categories add a security
/// review line.
fn definition_of_done(category: Category) -> String {
    let mut items = vec![
        "- Code is reviewed and merged",
        "- Tests are written and passing",
        "- Documentation is updated",
    ];
    if matches!(category, Category::Database | Category::LlmIntegration) {
        items.push("- Security review is completed");
    }
    items.join("\n")
}
