//! Terminal display surface
//!
//! Shows a spinner while a prediction is in flight and prints the final
//! message (text or JSON) when it settles.

use crate::output::console::ConsoleFormatter;
use churn_application::DisplaySurface;
use churn_domain::{DisplayState, InvocationState, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// [`DisplaySurface`] that renders to the terminal
pub struct ConsoleSurface {
    format: OutputFormat,
    show_progress: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_progress: true,
            spinner: Mutex::new(None),
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start_spinner(&self, state: &InvocationState) {
        let display = DisplayState::from(state);
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(display.message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Some(previous) = self.lock_spinner().replace(pb) {
            previous.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        if let Some(pb) = self.lock_spinner().take() {
            pb.finish_and_clear();
        }
    }

    fn lock_spinner(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DisplaySurface for ConsoleSurface {
    fn render(&self, state: &InvocationState) {
        match state {
            InvocationState::Idle => self.stop_spinner(),
            InvocationState::InProgress => {
                if self.show_progress && self.format == OutputFormat::Text {
                    self.start_spinner(state);
                }
            }
            InvocationState::Succeeded { .. } | InvocationState::Failed { .. } => {
                self.stop_spinner();
                let output = match self.format {
                    OutputFormat::Text => ConsoleFormatter::format(state),
                    OutputFormat::Json => ConsoleFormatter::format_json(state),
                };
                println!("{}", output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let surface = ConsoleSurface::new(OutputFormat::Text);
        surface.render(&InvocationState::InProgress);
        assert!(surface.lock_spinner().is_some());

        surface.render(&InvocationState::failed("boom"));
        assert!(surface.lock_spinner().is_none());
    }

    #[test]
    fn test_no_spinner_when_quiet_or_json() {
        let quiet = ConsoleSurface::new(OutputFormat::Text).with_progress(false);
        quiet.render(&InvocationState::InProgress);
        assert!(quiet.lock_spinner().is_none());

        let json = ConsoleSurface::new(OutputFormat::Json);
        json.render(&InvocationState::InProgress);
        assert!(json.lock_spinner().is_none());
    }
}
