//! MCP server over stdio.
//!
//! Tools mirror the CLI commands and call straight into `prosaic_core`.
//! Arguments arrive as JSON; tone names are parsed here so a bad name comes
//! back as `invalid_params` rather than a deserialization failure.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use prosaic_core::{Config, Tone, detection, humanize, language, markdown, rewrite};

use crate::commands::RewriteRng;

/// Parameters for the `detect_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectTextParams {
    /// The text to score.
    pub text: String,
    /// Treat `text` as Markdown and score only its prose.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `paraphrase_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ParaphraseTextParams {
    /// The text to rewrite.
    pub text: String,
    /// Target tone: "academic", "business", "formal", or "casual".
    pub tone: Option<String>,
    /// Seed for a reproducible rewrite.
    pub seed: Option<u64>,
    /// Treat `text` as Markdown and rewrite only its prose.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `humanize_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HumanizeTextParams {
    /// The text to humanize.
    pub text: String,
    /// Target tone: "academic", "business", "formal", or "casual".
    pub tone: Option<String>,
    /// Seed for a reproducible rewrite.
    pub seed: Option<u64>,
    /// Maximum rewrite passes.
    pub max_passes: Option<u32>,
    /// Treat `text` as Markdown and work on its prose only.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `detect_language` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DetectLanguageParams {
    /// The text to inspect.
    pub text: String,
}

/// Tool host carrying the resolved config as per-call defaults.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    config: Config,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectServer {
    /// Server with the given defaults and input limit.
    pub fn with_config(config: Config, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            config,
            max_input_bytes,
        }
    }

    fn prepare(&self, text: &str, strip_markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(if strip_markdown {
            markdown::strip_to_prose(text)
        } else {
            text.to_string()
        })
    }

    fn tone(&self, requested: Option<&str>) -> Result<Tone, McpError> {
        requested.map_or(Ok(self.config.tone), |name| {
            name.parse::<Tone>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))
        })
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Server with built-in defaults and the standard input limit.
    pub fn new() -> Self {
        Self::with_config(Config::default(), Some(prosaic_core::DEFAULT_MAX_INPUT_BYTES))
    }

    /// Package metadata and the defaults tools fall back to.
    #[tool(
        description = "Get the server version and the defaults used when a tool argument is omitted (tone, seed, thresholds, input limit)."
    )]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(&self) -> Result<CallToolResult, McpError> {
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "tone": self.config.tone,
            "seed": self.config.seed,
            "flag_threshold": self.config.flag_threshold,
            "pass_threshold": self.config.pass_threshold,
            "max_passes": self.config.max_passes,
            "max_input_bytes": self.max_input_bytes,
        });
        tracing::debug!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(&info)?)]))
    }

    /// Score how machine-generated a text looks.
    #[tool(
        description = "Score how machine-generated a text looks (0-100). Returns the verdict, confidence, eight statistical features, and a per-feature score breakdown."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_text(
        &self,
        Parameters(params): Parameters<DetectTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "detect_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = detection::detect(&text);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "detect_text",
            score = report.score,
            label = report.label.label(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rewrite text in a tone.
    #[tool(
        description = "Rewrite English or Indonesian text in a tone (academic, business, formal, casual) using local rules. Returns the rewritten text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn paraphrase_text(
        &self,
        Parameters(params): Parameters<ParaphraseTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let tone = self.tone(params.tone.as_deref())?;
        tracing::debug!(tool = "paraphrase_text", tone = %tone, "executing MCP tool");

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let mut rng = RewriteRng::from_seed(params.seed.or(self.config.seed));
        let rewritten = rewrite::paraphrase_with_rng(&text, tone, rng.as_dyn());

        tracing::info!(
            tool = "paraphrase_text",
            output_len = rewritten.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(rewritten)]))
    }

    /// Detect, rewrite, and re-detect.
    #[tool(
        description = "Score text, rewrite it in a tone, and score the rewrite. Returns before/after reports, the rewritten text, and whether it passed."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn humanize_text(
        &self,
        Parameters(params): Parameters<HumanizeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let tone = self.tone(params.tone.as_deref())?;
        tracing::debug!(tool = "humanize_text", tone = %tone, "executing MCP tool");

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let mut options = self.config.humanize_options(Some(tone));
        if let Some(passes) = params.max_passes {
            options.max_passes = passes;
        }
        let mut rng = RewriteRng::from_seed(params.seed.or(self.config.seed));
        let outcome = humanize::humanize(&text, &options, rng.as_dyn());
        let json = to_json(&outcome)?;

        tracing::info!(
            tool = "humanize_text",
            before = outcome.before.score,
            after = outcome.after.score,
            passed = outcome.passed,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Identify the language of a text.
    #[tool(description = "Identify whether text is Indonesian (\"id\") or English (\"en\").")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_language(
        &self,
        Parameters(params): Parameters<DetectLanguageParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "detect_language", "executing MCP tool");

        let text = self.prepare(&params.text, false)?;
        let detected = language::detect_language(&text);

        tracing::info!(
            tool = "detect_language",
            language = detected.code(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(
            detected.code().to_string(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Scores English or Indonesian text for machine-generated style and rewrites it \
                 locally. Call detect_text first; use humanize_text to rewrite and re-score in \
                 one step, or paraphrase_text for the rewrite alone."
                    .to_string(),
            ),
        }
    }
}
