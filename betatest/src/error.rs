/// Errors raised by the harness itself.
///
/// Failing assertions are not errors; they are recorded in the run state.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No test with the given name has been registered.
    #[error("test not found: {0}")]
    UnknownTest(String),

    /// A test with the given name has already been registered.
    #[error("test already defined: {0}")]
    DuplicateTest(String),

    /// An I/O error occurred while writing the report.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
