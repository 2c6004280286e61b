//! The closed registry of semantic exit codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic exit codes for command line tools.
///
/// ## Reserved Ranges
/// - **0**: success
/// - **1**: generic failure
/// - **80-99**: user errors
/// - **100-119**: software or system errors
/// - **129-254**: signal-derived (128 + signal number)
///
/// Values are stable; changing one is a breaking change for every tool and
/// pipeline that matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum Code {
    /// The program exited successfully.
    OK = 0,

    /// The program exited unsuccessfully, with no extra context as to what
    /// the failure was.
    NotOK = 1,

    // 80-99 are reserved for user errors.
    /// The program was used incorrectly.
    ///
    /// Examples: a required argument was omitted, or an invalid value was
    /// supplied for a flag.
    UsageError = 80,

    /// An unrecognized subcommand was invoked.
    ///
    /// Intended for CLI multi-tools. A shell exits 127 when a command does
    /// not exist at all; 81 is distinct in that the command exists but the
    /// subcommand does not (`git nope` could exit 81).
    UnknownSubcommand = 81,

    /// A precondition wasn't satisfied.
    ///
    /// Examples: the user must be on a VPN first, or needs a minimum version
    /// of some other software installed.
    RequirementNotMet = 82,

    /// The user isn't authorized to perform the requested action.
    Forbidden = 83,

    /// The program has been migrated to a new location.
    MovedPermanently = 84,

    // 100-119 are reserved for software or system errors.
    /// A problem in the program's own code or dependencies.
    ///
    /// Used instead of 1 when the failure is known to be internal rather
    /// than caused by the invocation.
    InternalError = 100,

    /// A service the program depends on was not available.
    ///
    /// Examples: a local daemon or remote service did not respond, a
    /// connection was closed unexpectedly, an HTTP service responded 503.
    Unavailable = 101,
}

impl Code {
    /// Every registry member, in value order.
    pub const ALL: [Code; 9] = [
        Code::OK,
        Code::NotOK,
        Code::UsageError,
        Code::UnknownSubcommand,
        Code::RequirementNotMet,
        Code::Forbidden,
        Code::MovedPermanently,
        Code::InternalError,
        Code::Unavailable,
    ];

    /// The numeric status reported to the OS on exit.
    pub fn value(&self) -> i32 {
        *self as i32
    }

    /// The symbolic name, as it appears in the README table.
    pub fn name(&self) -> &'static str {
        match self {
            Code::OK => "OK",
            Code::NotOK => "NotOK",
            Code::UsageError => "UsageError",
            Code::UnknownSubcommand => "UnknownSubcommand",
            Code::RequirementNotMet => "RequirementNotMet",
            Code::Forbidden => "Forbidden",
            Code::MovedPermanently => "MovedPermanently",
            Code::InternalError => "InternalError",
            Code::Unavailable => "Unavailable",
        }
    }

    /// Reports whether this code means success.
    pub fn is_ok(&self) -> bool {
        is_ok(self.value())
    }

    /// Reports whether this code means failure of any kind.
    pub fn is_error(&self) -> bool {
        is_error(self.value())
    }

    /// Reports whether this code signals misuse by the invoking user.
    pub fn is_user_error(&self) -> bool {
        is_user_error(self.value())
    }

    /// Reports whether this code signals an internal or dependency failure.
    pub fn is_software_error(&self) -> bool {
        is_software_error(self.value())
    }

    /// Reports whether this code looks signal-derived. Always false for
    /// registry members; see [`crate::is_signal`] for the raw-status
    /// semantics.
    pub fn is_signal(&self) -> bool {
        is_signal(self.value())
    }

    /// End the process, reporting this code to the OS.
    pub fn terminate(&self) -> ! {
        std::process::exit(self.value())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reports whether a raw exit status means success (zero).
pub fn is_ok(status: i32) -> bool {
    status == 0
}

/// Reports whether a raw exit status means failure (non-zero).
pub fn is_error(status: i32) -> bool {
    status != 0
}

/// Reports whether a raw exit status falls in the user error range (80-99).
pub fn is_user_error(status: i32) -> bool {
    (80..=99).contains(&status)
}

/// Reports whether a raw exit status falls in the software error range
/// (100-119).
pub fn is_software_error(status: i32) -> bool {
    (100..=119).contains(&status)
}

/// Reports whether a raw exit status looks signal-derived.
///
/// True strictly between 128 and 255: 128 itself (signal zero) and 255 (the
/// reserved out-of-range sentinel) are both excluded.
pub fn is_signal(status: i32) -> bool {
    status > 128 && status < 255
}

/// The exit status a process conventionally reports when terminated by
/// `signal` (128 + the signal number).
pub fn from_signal(signal: i32) -> i32 {
    128 + signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_are_unique() {
        let mut seen = HashSet::new();
        for code in Code::ALL {
            assert!(seen.insert(code.value()), "duplicate value {}", code.value());
        }
    }

    #[test]
    fn ok_and_error_are_complements() {
        for code in Code::ALL {
            assert_ne!(code.is_ok(), code.is_error(), "{}", code);
        }
        assert!(Code::OK.is_ok());
        assert!(Code::NotOK.is_error());
    }

    #[test]
    fn classification_matches_declared_ranges() {
        for code in Code::ALL {
            assert_eq!(code.is_user_error(), (80..=99).contains(&code.value()));
            assert_eq!(code.is_software_error(), (100..=119).contains(&code.value()));
            assert!(!code.is_signal());
        }
    }

    #[test]
    fn user_error_range_boundaries() {
        assert!(!is_user_error(79));
        assert!(is_user_error(80));
        assert!(is_user_error(99));
        assert!(!is_user_error(100));
    }

    #[test]
    fn software_error_range_boundaries() {
        assert!(!is_software_error(99));
        assert!(is_software_error(100));
        assert!(is_software_error(119));
        assert!(!is_software_error(120));
    }

    #[test]
    fn signal_range_excludes_both_endpoints() {
        assert!(!is_signal(128));
        assert!(is_signal(129));
        assert!(is_signal(254));
        assert!(!is_signal(255));
    }

    #[test]
    fn user_and_software_ranges_never_overlap() {
        for status in 0..=255 {
            assert!(!(is_user_error(status) && is_software_error(status)));
        }
    }

    #[test]
    fn from_signal_offsets_by_128() {
        assert_eq!(from_signal(2), 130); // SIGINT
        assert_eq!(from_signal(15), 143); // SIGTERM
        assert!(is_signal(from_signal(2)));
    }

    #[test]
    fn display_prints_symbolic_name() {
        assert_eq!(Code::OK.to_string(), "OK");
        assert_eq!(Code::UsageError.to_string(), "UsageError");
    }
}
