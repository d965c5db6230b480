//! Core domain logic for annolint
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Task, Annotation, `CheckResult`, Severity)
//! - `services/` - Validators, dispatch, and aggregation
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
