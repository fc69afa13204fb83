//! The customer form: field definitions and the submitted snapshot.

pub mod field;
pub mod snapshot;

pub use field::{FieldKind, FormField};
pub use snapshot::{FormSnapshot, FormValue};
