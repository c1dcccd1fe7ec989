//! MCP module
//!
//! Exposes the analysis tools over the Model Context Protocol.

pub mod server;

pub use server::FoodScanService;
