//! Core library for gloria-mcp
//!
//! This crate implements the **Functional Core** of the gloria-mcp server,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`gloria_mcp_core`** (this crate): Pure shaping functions with zero I/O
//! - **`gloria-mcp`**: HTTP client, configuration and MCP transports (the Imperative Shell)
//!
//! Everything in here takes raw JSON handed over by the shell and returns the
//! exact value an agent gets back. Nothing here knows about HTTP, the token or
//! the MCP wire format.
//!
//! # Module Organization
//!
//! - [`news`]: Free-tier projection of news items
//! - [`recap`]: Recap reshaping
//! - [`payment`]: Static x402 payment instructions for premium endpoints
//! - [`categories`]: Text rendering of the category list
//! - [`limits`]: Result-count clamping shared by the news tools
//! - [`lookup`]: Found / not-found outcome of single-record lookups
//! - [`about`]: Static descriptive text served as a resource
//!
//! # Example Usage
//!
//! ```rust
//! use gloria_mcp_core::news::truncate_news;
//! use serde_json::json;
//!
//! let item = json!({
//!     "id": "abc",
//!     "signal": "Bitcoin ETF inflows hit record",
//!     "long_context": "paid-only analysis"
//! });
//!
//! let free = truncate_news(item.as_object().unwrap());
//! assert!(free.contains_key("signal"));
//! assert!(!free.contains_key("long_context"));
//! ```

pub mod about;
pub mod categories;
pub mod limits;
pub mod lookup;
pub mod news;
pub mod payment;
pub mod recap;
