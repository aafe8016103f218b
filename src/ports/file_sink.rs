use std::path::Path;

use crate::domain::AppError;

use super::InteractiveIo;

/// Result of handing rendered output to a [`FileSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The target existed and the user did not agree to overwrite it.
    Declined,
}

/// Port for persisting generated output.
pub trait FileSink {
    /// Write `content` to `path`, asking through `io` before replacing an existing file.
    fn write(
        &mut self,
        path: &Path,
        content: &str,
        io: &mut dyn InteractiveIo,
    ) -> Result<WriteOutcome, AppError>;
}
