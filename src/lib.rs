//! MCP server configuration discovery.
//!
//! Finds every MCP configuration file on the machine (the per-user registry
//! under `$HOME` plus a bounded sweep of common project locations),
//! normalizes the different file formats into one model, and reports which
//! definition wins when a server name is declared more than once.
//!
//! - **[`discovery`]**: walk the filesystem and collect [`config::DiscoveryRecord`]s
//! - **[`config`]**: file formats, the registry, and the normalized model
//! - **[`resolve`]**: precedence between duplicate server names
//! - **[`render`]** / **[`commands`]**: text and JSON presentation
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod platform;
pub mod render;
pub mod resolve;
