pub mod invocation;

pub use invocation::{handle_invocation, respond};
