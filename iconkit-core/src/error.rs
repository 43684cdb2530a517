use crate::process::ExitStatus;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No path to original / hi-res icon provided")]
    NoInput,
    #[error("Too many arguments")]
    TooManyArguments,
    #[error("There is no such file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read image {}", .0.display())]
    UnreadableImage(PathBuf, #[source] eyre::Report),
    #[error("failed to write icon {}", .0.display())]
    EncodeIcon(PathBuf, #[source] eyre::Report),
    #[error("{} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to create iconset directory {}", .0.display())]
    CreateIconset(PathBuf, #[source] std::io::Error),
    #[error("failed to start {}", .0.display())]
    FailedToStartTool(PathBuf, #[source] std::io::Error),
    #[error("{} {}", .tool.display(), .status.message())]
    ConversionToolFailed { tool: PathBuf, status: ExitStatus },
}

impl Error {
    /// Errors caused by how the tool was invoked rather than by the conversion itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::NoInput | Error::TooManyArguments | Error::MissingFile(_)
        )
    }

    pub fn is_usage_error(&self) -> bool {
        matches!(self, Error::NoInput | Error::TooManyArguments)
    }
}
