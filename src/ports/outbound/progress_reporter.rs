/// ProgressReporter port for reporting progress during a release calculation
///
/// This is the only logging surface the application layer uses; adapters
/// decide where messages end up.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a recoverable problem, e.g. a revision fallback
    fn report_warning(&self, message: &str);

    /// Marks the start of a long-running step such as package listing
    fn begin_step(&self, message: &str);

    /// Marks the end of the step started by the last `begin_step`
    fn end_step(&self);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
