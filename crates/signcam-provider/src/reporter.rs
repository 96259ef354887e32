/// Diagnostic sink handed to the provider by its host.
///
/// The provider only forwards failure descriptions into it and never reads
/// anything back.
pub trait ErrorReporter {
    fn report(&mut self, message: &str);
}

/// Forwards reports to the `log` facade at error level.
#[derive(Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&mut self, message: &str) {
        log::error!("{message}");
    }
}

/// Discards every report.
#[derive(Debug, Default)]
pub struct NullReporter;

impl ErrorReporter for NullReporter {
    fn report(&mut self, _message: &str) {}
}
