//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text metrics to editors and AI assistants over stdio. The
//! server is a presentation layer: every tool delegates to
//! `penmeter-core` and returns the report as pretty JSON.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use penmeter_core::readability::{self, ReadabilityAnalyzer};
use penmeter_core::{DEFAULT_MAX_INPUT_BYTES, metrics, reading_time};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `assess_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AssessReadabilityParams {
    /// The text to grade.
    pub text: String,
    /// Maximum acceptable grade level.
    pub max_grade: Option<u32>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `estimate_reading_time` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct EstimateReadingTimeParams {
    /// The text to time.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum acceptable grade level.
    pub max_grade: Option<u32>,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing readability and reading-time tools.
#[derive(Clone)]
pub struct PenmeterServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    analyzer: ReadabilityAnalyzer,
    max_input_bytes: Option<usize>,
}

impl Default for PenmeterServer {
    fn default() -> Self {
        Self::new(ReadabilityAnalyzer::new(), Some(DEFAULT_MAX_INPUT_BYTES))
    }
}

fn to_json<T: Serialize>(report: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl PenmeterServer {
    /// Create a server scoring with `analyzer` and rejecting inputs over
    /// `max_input_bytes`.
    pub fn new(analyzer: ReadabilityAnalyzer, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            analyzer,
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let text = if params.format == "json" {
            let info = serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            });
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Grade text readability.
    #[tool(
        description = "Grade the readability of text. Returns a grade level (1-20, 0 for empty text), a level label (Very Easy, Easy, Good, Moderate, Complex) and the sentence and word statistics behind it."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn assess_readability(
        &self,
        Parameters(params): Parameters<AssessReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "assess_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = readability::check_readability(
            &self.analyzer,
            &params.text,
            params.strip_markdown,
            params.max_grade,
        );

        tracing::info!(
            tool = "assess_readability",
            grade = report.grade,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Estimate reading time.
    #[tool(
        description = "Estimate how long text takes to read. Returns minutes, seconds and a display string such as \"1m 5s\"."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn estimate_reading_time(
        &self,
        Parameters(params): Parameters<EstimateReadingTimeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "estimate_reading_time",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = reading_time::check_reading_time(&params.text, params.strip_markdown);

        tracing::info!(
            tool = "estimate_reading_time",
            seconds = report.minutes * 60 + report.seconds,
            "MCP tool completed"
        );
        to_json(&report)
    }

    /// Readability and reading time in one call.
    #[tool(description = "Grade readability and estimate reading time for the same text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = metrics::analyze_text(
            &self.analyzer,
            &params.text,
            params.strip_markdown,
            params.max_grade,
        );

        tracing::info!(tool = "analyze_text", "MCP tool completed");
        to_json(&report)
    }
}

#[tool_handler]
impl ServerHandler for PenmeterServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use assess_readability, estimate_reading_time or analyze_text on draft text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = PenmeterServer::default();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = PenmeterServer::default();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = PenmeterServer::default();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn assess_readability_tool_works() {
        let server = PenmeterServer::default();
        let params = Parameters(AssessReadabilityParams {
            text: "The cat sat.".to_string(),
            max_grade: None,
            strip_markdown: false,
        });

        let result = server
            .assess_readability(params)
            .expect("assess_readability should succeed");
        let json = json_of(&result);
        assert_eq!(json["grade"], 1);
        assert_eq!(json["level"], "Very Easy");
        assert_eq!(json["words"], 3);
    }

    #[test]
    fn estimate_reading_time_tool_works() {
        let server = PenmeterServer::default();
        let params = Parameters(EstimateReadingTimeParams {
            text: "Hello world.".to_string(),
            strip_markdown: false,
        });

        let result = server
            .estimate_reading_time(params)
            .expect("estimate_reading_time should succeed");
        let json = json_of(&result);
        assert_eq!(json["minutes"], 0);
        assert_eq!(json["seconds"], 1);
        assert_eq!(json["text"], "1s");
    }

    #[test]
    fn analyze_text_tool_works() {
        let server = PenmeterServer::default();
        let params = Parameters(AnalyzeTextParams {
            text: "Hello world.".to_string(),
            max_grade: Some(10),
            strip_markdown: false,
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        let json = json_of(&result);
        assert!(json["readability"].is_object());
        assert_eq!(json["readability"]["over_max"], false);
        assert_eq!(json["reading_time"]["text"], "1s");
    }

    #[test]
    fn configured_common_words_apply() {
        let analyzer = ReadabilityAnalyzer::new().with_common_words(["organization"]);
        let server = PenmeterServer::new(analyzer, None);
        let params = Parameters(AssessReadabilityParams {
            text: "Organization matters.".to_string(),
            max_grade: None,
            strip_markdown: false,
        });

        let result = server.assess_readability(params).unwrap();
        assert_eq!(json_of(&result)["complex_words"], 0);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = PenmeterServer::new(ReadabilityAnalyzer::new(), Some(4));
        let params = Parameters(EstimateReadingTimeParams {
            text: "Hello world.".to_string(),
            strip_markdown: false,
        });

        assert!(server.estimate_reading_time(params).is_err());
    }
}
