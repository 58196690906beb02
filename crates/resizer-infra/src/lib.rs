//! Resizer Infrastructure Library
//!
//! Shared plumbing for the resizer entry points:
//! - Telemetry initialization (tracing subscriber)
//! - Invocation response envelope

pub mod response;
pub mod telemetry;

pub use response::InvocationResponse;
pub use telemetry::init_telemetry;
