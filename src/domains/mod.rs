//! Domains module containing business logic organized by bounded contexts.
//!
//! - **noun_project**: the upstream API client and its request signing
//! - **tools**: the MCP tool catalog and dispatcher built on top of it

pub mod noun_project;
pub mod tools;
