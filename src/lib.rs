//! # semexit
//!
//! Semantic exit codes for command line tools, to aid debugging and
//! instrumentation.
//!
//! Codes are reserved in two ranges:
//! - **80-99**: user errors. The invocation was wrong (bad flag, missing
//!   precondition, unauthorized action).
//! - **100-119**: software or system errors. The program or something it
//!   depends on was wrong.
//!
//! The registry is a closed enum ([`Code`]), so referencing an undefined
//! code is a compile error; the only runtime "not found" paths are lookups
//! from outside the process (a raw OS status, or a name parsed out of
//! text). The [`validate`] check diffs the README's code table against the
//! registry so the documentation can never quietly drift from the code.

mod code;
mod convert;
mod drift;

pub use code::{from_signal, is_error, is_ok, is_signal, is_software_error, is_user_error, Code};
pub use convert::{wrap, ExitError, UnknownCode};
pub use drift::{diff_against_registry, parse_code_table, validate, Discrepancy, DriftError};
