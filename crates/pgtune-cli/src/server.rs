use pgtune_catalog::{
    CatalogError, Lang, Report, alter_system_script, build_report, category_label, description,
    doc_url, is_restart_required,
};
use pgtune_core::{ConfigInput, StorageType, classify};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::Defaults;

/// Stateless: every tool call is an independent derivation.
#[derive(Clone)]
pub struct PgTuneServer {
    defaults: Defaults,
    tool_router: ToolRouter<Self>,
}

impl PgTuneServer {
    pub fn new(defaults: Defaults) -> Self {
        Self {
            defaults,
            tool_router: Self::tool_router(),
        }
    }

    fn lang(&self, requested: Option<&str>) -> Result<Lang, McpError> {
        match requested {
            Some(s) => s.parse().map_err(invalid_params),
            None => Ok(self.defaults.lang),
        }
    }

    fn report(&self, req: &DeriveRequest) -> Result<Report, McpError> {
        let storage = match req.storage_type.as_deref() {
            Some(s) => s
                .parse::<StorageType>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?,
            None => self.defaults.storage,
        };
        let lang = self.lang(req.lang.as_deref())?;
        let input = ConfigInput::new(req.cpu_cores, req.memory_gb, storage).with_db_version(
            req.db_version
                .clone()
                .unwrap_or_else(|| self.defaults.db_version.clone()),
        );
        build_report(&input, lang).map_err(invalid_params)
    }
}

fn invalid_params(e: CatalogError) -> McpError {
    McpError::invalid_params(e.to_string(), None)
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct DeriveRequest {
    /// Number of CPU cores, at least 1
    cpu_cores: u32,
    /// Memory size in GB; fractional values are allowed
    memory_gb: f64,
    /// Storage medium: "ssd" or "hdd". Defaults to the server's configured medium.
    storage_type: Option<String>,
    /// PostgreSQL major version, used only for documentation links
    db_version: Option<String>,
    /// Language for descriptions and labels: "zh" or "en"
    lang: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ExplainRequest {
    /// Parameter name, e.g. "shared_buffers"
    name: String,
    /// PostgreSQL major version, used only for the documentation link
    db_version: Option<String>,
    /// Language for the description and label: "zh" or "en"
    lang: Option<String>,
}

#[tool_router]
impl PgTuneServer {
    #[tool(
        description = "Recommend PostgreSQL settings for a server. Given CPU cores, memory in GB, and storage medium, returns every derived parameter in order with its value, category, restart requirement, description, and documentation link."
    )]
    async fn pgtune_derive(
        &self,
        Parameters(req): Parameters<DeriveRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("pgtune_derive: {req:?}");
        let report = self.report(&req)?;
        let value = serde_json::to_value(&report)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        json_result(&value)
    }

    #[tool(
        description = "Produce an ALTER SYSTEM script applying the recommended PostgreSQL settings, ending with pg_reload_conf(). Also lists the parameters that only take effect after a restart."
    )]
    async fn pgtune_sql(
        &self,
        Parameters(req): Parameters<DeriveRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("pgtune_sql: {req:?}");
        let report = self.report(&req)?;
        let restart: Vec<&str> = report.restart_required().map(|r| r.name).collect();
        json_result(&serde_json::json!({
            "sql": alter_system_script(&report.parameters(), report.lang),
            "restart_required": restart,
        }))
    }

    #[tool(
        description = "Explain a single PostgreSQL parameter: its category, whether changing it requires a server restart, a description, and the official documentation link."
    )]
    async fn pgtune_explain(
        &self,
        Parameters(req): Parameters<ExplainRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!("pgtune_explain: {}", req.name);
        let lang = self.lang(req.lang.as_deref())?;
        let version = req
            .db_version
            .as_deref()
            .unwrap_or(self.defaults.db_version.as_str());
        let category = classify(&req.name);
        json_result(&serde_json::json!({
            "name": &req.name,
            "category": category,
            "category_label": category_label(category, lang),
            "restart_required": is_restart_required(&req.name),
            "description": description(&req.name, lang),
            "doc_url": doc_url(&req.name, version),
        }))
    }
}

#[tool_handler]
impl ServerHandler for PgTuneServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Recommends a starting PostgreSQL configuration from hardware specs.\n\n\
                 - pgtune_derive: full parameter list with categories, restart flags, descriptions and doc links.\n\
                 - pgtune_sql: ALTER SYSTEM statements for the same list.\n\
                 - pgtune_explain: details for one parameter name.\n\n\
                 Values come from fixed formulas over CPU cores, memory and storage medium. \
                 They are a starting point, not a guarantee of fitness for a particular workload."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
