//! Feature-to-hierarchy synthesis engine.
//!
//! Turns unstructured text (or collaborator-derived feature records) into a
//! validated two-level Epic/Task hierarchy annotated with priorities, tags,
//! and templated descriptions. Every operation is a deterministic,
//! side-effect-free function of its inputs aside from id generation; the
//! engine holds no state between calls and performs no I/O.

pub mod builder;
pub mod chain;
pub mod engine;
pub mod extract;
pub mod priority;
pub mod records;
pub mod template;
pub mod text;
