//! Shared test utilities for the phosphor-mcp workspace.
//!
//! This crate provides a stand-in for the upstream asset repository so test
//! suites never touch the network. It is a dev-dependency only and is never
//! published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample SVG assets in the upstream layout
//! - [`upstream`]: [`MockUpstream`](upstream::MockUpstream), a local HTTP
//!   server that serves them

pub mod fixtures;
pub mod upstream;
