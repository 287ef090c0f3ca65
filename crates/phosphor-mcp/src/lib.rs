//! MCP Server for Phosphor Icons
//!
//! This crate exposes the Phosphor icon set via the Model Context Protocol
//! (MCP), so that agentic IDEs can look up icon names and pull styled SVG
//! markup straight into the code they write.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (IDE / assistant) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ phosphor-mcp (MCP Server) ]
//!        | (Rust API)
//!        v
//! [ phosphor-core (IconService) ]
//!        |
//!        +--> [ embedded or user catalog ]
//!        +--> [ icon host over HTTPS ]
//! ```
//!
//! # Tools
//!
//! - `get-icon`, `get-multiple-icons`: fetch SVG with optional color and size
//! - `search-icons`, `list-categories`: browse the catalog
//!
//! # Resources
//!
//! - `phosphor://catalog` - Catalog as JSON
//! - `phosphor://weights` - The six weights and their styling rules

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod resource_handlers;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use handlers::handle_tool_call;
pub use server::PhosphorMcpServer;
pub use tools::{ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
