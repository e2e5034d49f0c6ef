/// Precondition checks run between parsing and dispatch.
pub mod rules;

use crate::confirm::Confirm;
use crate::errors::AqError;
use crate::invocation::ParsedInvocation;

/// A per-command check. Inspects the invocation and may ask for confirmation,
/// but never modifies it.
pub type Precondition = fn(&ParsedInvocation<'_>, &dyn Confirm) -> Result<(), Rejection>;

/// Why a precondition blocked an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Missing or malformed argument or flag.
    Usage(String),
    /// Confirmation declined.
    Canceled,
}

impl Rejection {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Usage(message) => message,
            Self::Canceled => "Canceled.",
        }
    }
}

impl From<Rejection> for AqError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Usage(message) => Self::Usage(message),
            Rejection::Canceled => Self::Canceled,
        }
    }
}

/// Result of running a command's precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

impl ValidationOutcome {
    /// Convert into a `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the rejection as `AqError::Usage` or `AqError::Canceled`.
    pub fn into_result(self) -> Result<(), AqError> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected(rejection) => Err(rejection.into()),
        }
    }
}

/// Run the matched command's precondition.
pub fn validate(invocation: &ParsedInvocation<'_>, confirm: &dyn Confirm) -> ValidationOutcome {
    let command = invocation.command();
    match (command.precondition)(invocation, confirm) {
        Ok(()) => {
            log::debug!("'{}' accepted", command.name);
            ValidationOutcome::Accepted
        }
        Err(rejection) => {
            log::debug!("'{}' rejected: {}", command.name, rejection.message());
            ValidationOutcome::Rejected(rejection)
        }
    }
}
