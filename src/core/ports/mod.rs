//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (the annotation platform, the image probe,
//! and report persistence).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod dimension_probe;
mod report_sink;
mod task_source;

pub use dimension_probe::DimensionProbe;
pub use report_sink::ReportSink;
pub use task_source::TaskSource;
