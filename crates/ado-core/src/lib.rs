//! Core types, configuration, and validation for ADO work-item instructions.
//!
//! Provides the work item data model ([`model::WorkItem`], [`model::AdoInstructions`]),
//! JSON schema helpers, the organization configuration threaded through synthesis,
//! and structural validation of instruction payloads.

pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod validate;
