/// ProgressReporter port for user-facing progress during CLI operations
///
/// This is separate from diagnostic logging: messages go to the person
/// running the command (e.g., on stderr) and never to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Shows an activity indicator while a blocking call is in flight
    ///
    /// # Arguments
    /// * `message` - What is being waited on
    fn start_waiting(&self, message: &str);

    /// Reports an error or warning message, clearing any activity indicator
    fn report_error(&self, message: &str);

    /// Reports completion of an operation, clearing any activity indicator
    fn report_completion(&self, message: &str);
}
