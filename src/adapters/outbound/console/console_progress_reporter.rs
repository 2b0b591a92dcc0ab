use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;
use tracing::{info, warn};

const SPINNER_TEMPLATE: &str = "   {spinner:.green} {msg} ({elapsed})";

/// ConsoleProgressReporter adapter for reporting progress through `tracing`
///
/// Messages are emitted as `tracing` events, which the subscriber installed
/// in `main` writes to stderr so the console never mixes with the manifest.
/// Long-running steps get an indicatif spinner that is suspended while log
/// lines are printed.
pub struct ConsoleProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    /// Runs `emit` with the active spinner (if any) cleared from the terminal
    fn with_spinner_suspended(&self, emit: impl FnOnce()) {
        match self.spinner.borrow().as_ref() {
            Some(pb) => pb.suspend(emit),
            None => emit(),
        }
    }

    fn finish_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report(&self, message: &str) {
        self.with_spinner_suspended(|| info!("{}", message));
    }

    fn report_warning(&self, message: &str) {
        self.with_spinner_suspended(|| warn!("{}", message));
    }

    fn begin_step(&self, message: &str) {
        self.finish_spinner();

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn end_step(&self) {
        self.finish_spinner();
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        info!("{}", message);
    }
}
