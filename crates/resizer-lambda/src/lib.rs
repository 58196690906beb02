//! Resizer Lambda Library
//!
//! Event parsing, the resize orchestrator and the per-invocation handler.
//! The `resizer-lambda` binary and the `resizer` CLI both drive
//! [`handlers::handle_invocation`].

pub mod error;
pub mod event;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;

pub use error::ResizeError;
pub use event::{parse_event, parse_value};
pub use handlers::handle_invocation;
pub use services::ResizeService;
pub use setup::initialize_state;
pub use state::AppState;
