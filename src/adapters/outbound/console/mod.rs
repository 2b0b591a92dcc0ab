/// Console adapter for progress and log output
mod console_progress_reporter;

pub use console_progress_reporter::ConsoleProgressReporter;
