//! Succession planning rule engine.
//!
//! The crate hosts the two deterministic computations behind the succession
//! dashboards: nine-box segmentation of employees by performance and
//! potential, and gap scoring of an employee against a target role. Both are
//! pure functions over typed value objects; the HTTP surface in
//! `services/api` is a thin host around them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
