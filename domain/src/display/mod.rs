//! What the user sees: invocation state and its rendered message/colour.

pub mod invocation;
pub mod state;

pub use invocation::InvocationState;
pub use state::{DisplayState, Tone};
