//! Interfaces for reporting progress and errors through the CLI

use std::error::Error;
use std::fmt;
use std::io;

/// A destination for progress updates and error messages. Any writer that can be moved between
/// threads qualifies.
pub trait Log: io::Write + Send + 'static {}

impl<T: io::Write + Send + 'static> Log for T {}

/// Writes one line of progress output to a [Log]. Failing to write progress output does not
/// affect the run, so I/O errors are discarded.
#[macro_export]
macro_rules! log {
    ($log:expr, $($arg:tt)*) => {{
        use ::std::io::Write as _;
        let _ = writeln!($log, $($arg)*);
    }};
}

/// Extension for rendering an error together with all of its sources.
pub trait ErrorExt {
    /// Returns a displayable value that prints this error followed by its sources, on one line and
    /// separated by `: `.
    fn error_chain(&self) -> ErrorChain<&Self> {
        ErrorChain(self)
    }
}

impl<T: Error + ?Sized> ErrorExt for T {}

/// See [ErrorExt::error_chain].
pub struct ErrorChain<T>(T);

impl<T> fmt::Display for ErrorChain<&T>
where
    T: Error + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut error: Option<&dyn Error> = self.0.source();
        while let Some(e) = error {
            write!(f, ": {}", e)?;
            error = e.source();
        }
        Ok(())
    }
}
