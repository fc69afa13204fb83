//! Display surface port
//!
//! The two visible state slots (message text and colour signal) live in
//! the presentation layer; the use case only tells the surface which
//! invocation state to show.

use churn_domain::InvocationState;

/// Sink for invocation state changes
///
/// Concurrent invocations sharing one surface simply overwrite each other:
/// whichever finishes last is what stays on screen.
pub trait DisplaySurface: Send + Sync {
    fn render(&self, state: &InvocationState);
}

/// Surface that shows nothing
pub struct NoDisplay;

impl DisplaySurface for NoDisplay {
    fn render(&self, _state: &InvocationState) {}
}
