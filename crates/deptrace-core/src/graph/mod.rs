//! Dependency graph construction and path exploration
//!
//! Provides the core analysis pipeline:
//! - adjacency construction from ordered edge records
//! - depth-first path enumeration with in-path cycle detection
//! - three-way classification of completed paths

pub mod builder;
pub mod classify;
pub mod explore;
pub mod types;

pub use classify::{classify, Report};
pub use explore::explore;
pub use types::{DepPath, Edge, Graph, PathKind};
