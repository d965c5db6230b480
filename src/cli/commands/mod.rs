//! Command implementations

mod report;

pub use report::report;
