//! Output formatting and the terminal display surface

pub mod console;
pub mod surface;

pub use console::ConsoleFormatter;
pub use surface::ConsoleSurface;
