/// Errors produced by the command pipeline.
use thiserror::Error;

/// Broad failure classes, used by callers that care about the kind of
/// failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ErrorKind {
    /// A precondition rejected the invocation, or argv was malformed.
    Usage,
    /// The user declined a confirmation prompt.
    Cancellation,
    /// The action handler reported a failure.
    Execution,
    /// The command table itself is inconsistent.
    Registry,
}

/// Every way a single `aq` run can end unsuccessfully.
#[derive(Debug, Error)]
pub enum AqError {
    /// A precondition failed or a flag value could not be resolved.
    #[error("{0}")]
    Usage(String),

    /// The confirmation prompt was declined.
    #[error("Canceled.")]
    Canceled,

    /// The external action handler failed.
    #[error("{0:#}")]
    Execution(anyhow::Error),

    /// The command table could not be built.
    #[error("invalid command table: {0}")]
    Registry(String),

    /// clap rejected argv, or displayed help/version.
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl AqError {
    /// Return the process exit code for this error.
    ///
    /// Everything is 1 except clap's help and version displays, which are
    /// not failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cli(err) if !err.use_stderr() => 0,
            _ => 1,
        }
    }

    /// Machine-readable error code (`snake_case`) for the JSON envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage_error",
            Self::Canceled => "canceled",
            Self::Execution(_) => "execution_error",
            Self::Registry(_) => "registry_error",
            Self::Cli(_) => "cli_error",
        }
    }

    /// One-line message for machine-readable output. clap errors drop their
    /// `error:` prefix and the trailing usage block.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Cli(err) => {
                let rendered = err.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                first.strip_prefix("error: ").unwrap_or(first).to_owned()
            }
            _ => self.to_string(),
        }
    }

    #[must_use]
    #[allow(dead_code)]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) | Self::Cli(_) => ErrorKind::Usage,
            Self::Canceled => ErrorKind::Cancellation,
            Self::Execution(_) => ErrorKind::Execution,
            Self::Registry(_) => ErrorKind::Registry,
        }
    }
}
