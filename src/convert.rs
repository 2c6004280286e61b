//! Conversions between registry codes, raw statuses, and error values.

use crate::Code;
use std::fmt;
use std::str::FromStr;

/// A name or value with no corresponding registry member.
///
/// Registry-internal lookups are exhaustively matched and cannot fail; this
/// only arises when a code arrives from outside the process, e.g. a raw OS
/// status or a name scraped out of documentation text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownCode {
    /// No registry member carries this symbolic name.
    #[error("unknown exit code name: `{0}`")]
    Name(String),
    /// No registry member carries this numeric value.
    #[error("unknown exit code value: {0}")]
    Value(i32),
}

impl From<Code> for i32 {
    fn from(code: Code) -> i32 {
        code.value()
    }
}

impl TryFrom<i32> for Code {
    type Error = UnknownCode;

    fn try_from(value: i32) -> Result<Self, UnknownCode> {
        match value {
            0 => Ok(Code::OK),
            1 => Ok(Code::NotOK),
            80 => Ok(Code::UsageError),
            81 => Ok(Code::UnknownSubcommand),
            82 => Ok(Code::RequirementNotMet),
            83 => Ok(Code::Forbidden),
            84 => Ok(Code::MovedPermanently),
            100 => Ok(Code::InternalError),
            101 => Ok(Code::Unavailable),
            other => Err(UnknownCode::Value(other)),
        }
    }
}

impl FromStr for Code {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, UnknownCode> {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.name() == s)
            .ok_or_else(|| UnknownCode::Name(s.to_string()))
    }
}

/// An error that knows which exit code the process should report.
///
/// Lets a binary thread its intended exit status through `?` and recover it
/// at the top of `main` with [`Code::from_error`].
#[derive(Debug)]
pub struct ExitError {
    code: Code,
    cause: Option<anyhow::Error>,
}

impl ExitError {
    /// An error carrying only a code, with no underlying cause.
    pub fn new(code: Code) -> Self {
        Self { code, cause: None }
    }

    /// The exit code the process should terminate with.
    pub fn code(&self) -> Code {
        self.code
    }
}

/// Attach an exit code to an existing error.
pub fn wrap(cause: impl Into<anyhow::Error>, code: Code) -> ExitError {
    ExitError {
        code,
        cause: Some(cause.into()),
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}", cause),
            None => write!(f, "exit {}", self.code.value()),
        }
    }
}

impl std::error::Error for ExitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|cause| cause.as_ref())
    }
}

impl Code {
    /// Recover the intended exit code from an error.
    ///
    /// Returns the attached code if the error is an [`ExitError`], and
    /// [`Code::NotOK`] for anything else.
    pub fn from_error(err: &anyhow::Error) -> Code {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => exit.code,
            None => Code::NotOK,
        }
    }
}
