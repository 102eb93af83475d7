//! # caseflow
//!
//! Assignment engine for case-like work items. Scores caseworker
//! suitability per item, escalates items that breached a time-based
//! service-level expectation, and rebalances load away from overloaded
//! caseworkers.
//!
//! Storage and the staff directory are external collaborators behind the
//! traits in [`store`]; the engine itself holds no state between runs.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod telemetry;
