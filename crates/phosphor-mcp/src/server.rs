//! MCP Server implementation
//!
//! The main server struct that coordinates MCP protocol handling
//! with the icon lookup service.

use phosphor_core::IconService;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, InitializeParams, InitializeResult,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ReadResourceParams,
    ResourcesCapability, ServerCapabilities, ServerInfo, ToolCallParams, ToolsCapability,
    negotiate_protocol_version,
};
use crate::resource_handlers::read_resource;
use crate::resources::{ResourceDefinition, get_resource_definitions};
use crate::tools::{ToolDefinition, ToolResult, get_tool_definitions};
use crate::{Error, Result};

const INSTRUCTIONS: &str = "Use search-icons or list-categories to discover icon names, \
then get-icon or get-multiple-icons to fetch SVG markup. Weights: thin, light, regular, \
bold, fill, duotone.";

/// MCP Server for Phosphor Icons
///
/// Speaks newline-delimited JSON-RPC 2.0 on stdin/stdout. Requests are
/// handled one at a time; the shared [`IconService`] is never mutated.
///
/// # Example
///
/// ```ignore
/// use phosphor_core::{IconService, Settings};
/// use phosphor_mcp::PhosphorMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = IconService::from_settings(&Settings::default())?;
///     PhosphorMcpServer::new(service).run().await?;
///     Ok(())
/// }
/// ```
pub struct PhosphorMcpServer {
    service: IconService,

    /// Whether tool and resource definitions have been loaded
    initialized: bool,

    tools: Vec<ToolDefinition>,
    resources: Vec<ResourceDefinition>,
}

impl PhosphorMcpServer {
    pub fn new(service: IconService) -> Self {
        Self {
            service,
            initialized: false,
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Load tool and resource definitions.
    ///
    /// Tool schemas mention the configured default weight, so this runs
    /// after the service is built.
    pub fn initialize(&mut self) {
        tracing::info!(
            default_weight = %self.service.default_weight(),
            catalog_size = self.service.catalog().len(),
            "Initializing MCP server"
        );

        self.tools = get_tool_definitions(self.service.default_weight());
        self.resources = get_resource_definitions();
        self.initialized = true;
    }

    /// Run the MCP server until stdin is closed.
    pub async fn run(&mut self) -> Result<()> {
        if !self.initialized {
            self.initialize();
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        tracing::info!("MCP server ready, listening on stdio");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            let response = match self.handle_message(line).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to handle message");
                    serde_json::to_string(&JsonRpcResponse::error(
                        None,
                        INTERNAL_ERROR,
                        format!("Internal error: {e}"),
                    ))?
                }
            };

            // Notifications get no reply.
            if !response.is_empty() {
                stdout.write_all(response.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized JSON-RPC response, or an empty string for
    /// notifications. A line that is not JSON yields a parse error with a
    /// null id; JSON that is not a request object yields an invalid request
    /// error echoing whatever id it carried.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable message");
                let response =
                    JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"));
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let id = value
            .get("id")
            .filter(|id| id.is_string() || id.is_number())
            .cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(error = %e, "Invalid request object");
                let response =
                    JsonRpcResponse::error(id, INVALID_REQUEST, format!("Invalid request: {e}"));
                return serde_json::to_string(&response).map_err(Error::from);
            }
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            "resources/list" => self.handle_resources_list(request.id),
            "resources/read" => self.handle_resources_read(request.id, request.params).await,
            // Unknown notifications are ignored.
            _ if request.id.is_none() => return Ok(String::new()),
            _ => JsonRpcResponse::error(
                request.id,
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    fn handle_initialize(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: InitializeParams = if params.is_null() {
            InitializeParams::default()
        } else {
            match serde_json::from_value(params) {
                Ok(params) => params,
                Err(e) => {
                    return Ok(JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        format!("Invalid params: {e}"),
                    ));
                }
            }
        };

        if let Some(ref client) = params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: negotiate_protocol_version(params.protocol_version.as_deref())
                .to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "phosphor-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools = if self.initialized {
            self.tools.clone()
        } else {
            get_tool_definitions(self.service.default_weight())
        };
        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    /// Execute a tool. Tool failures are successful responses flagged with
    /// `isError`; only malformed params produce a JSON-RPC error.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let tool_result =
            match handle_tool_call(&self.service, &params.name, params.arguments).await {
                Ok(text) => ToolResult::text(text),
                Err(e) => {
                    tracing::debug!(tool = %params.name, error = %e, "Tool call failed");
                    ToolResult::error(e.to_string())
                }
            };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(tool_result)?))
    }

    fn handle_resources_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let resources = if self.initialized {
            self.resources.clone()
        } else {
            get_resource_definitions()
        };

        let resources: Vec<Value> = resources
            .iter()
            .map(|r| {
                json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "resources": resources }))
    }

    async fn handle_resources_read(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        let params: ReadResourceParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {e}"));
            }
        };

        match read_resource(&self.service, &params.uri).await {
            Ok(content) => JsonRpcResponse::success(
                id,
                json!({
                    "contents": [{
                        "uri": content.uri,
                        "mimeType": content.mime_type,
                        "text": content.text
                    }]
                }),
            ),
            Err(e) => JsonRpcResponse::error(id, INVALID_PARAMS, format!("Resource error: {e}")),
        }
    }

    pub fn service(&self) -> &IconService {
        &self.service
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn resources(&self) -> &[ResourceDefinition] {
        &self.resources
    }
}
