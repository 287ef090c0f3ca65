//! Core logic for the Phosphor Icons MCP server
//!
//! This crate turns an icon request (name, weight, optional color and size)
//! into styled SVG markup fetched from the Phosphor core asset repository.
//!
//! # Pipeline
//!
//! ```text
//! raw name --> [ name ] --> IconName
//!                               |
//!                               v
//!          Weight --> [ locator ] --> URL --> [ fetch ] --> SVG text
//!                                                 |             |
//!                                     (missing)   v             v
//!                                          [ suggest ]    [ style ] --> styled SVG
//! ```
//!
//! The [`Catalog`] only feeds search and suggestions; the upstream
//! repository decides whether an icon exists.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod locator;
pub mod name;
pub mod service;
pub mod style;
pub mod suggest;
pub mod weight;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{Settings, SettingsLayer, SettingsLoader};
pub use error::{Error, Result};
pub use fetch::{AssetSource, FetchOutcome, HttpAssetSource};
pub use locator::AssetLocator;
pub use name::{IconName, sanitize};
pub use service::{BatchItem, IconService};
pub use style::{IconSize, StyleOptions, apply_style};
pub use weight::Weight;
