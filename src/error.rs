//! Error types for process image replacement.

use nix::errno::Errno;
use thiserror::Error;

/// Errors surfaced by [`crate::exec::replace_process`] and friends.
///
/// There is deliberately no transient/permanent classification here: whether
/// a failed exec is worth retrying is the caller's policy, not this crate's.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The exec primitive itself failed. Carries the platform errno, whose
    /// `Display` includes the `strerror`-style message.
    #[error("process image replacement failed: {0}")]
    Os(#[from] Errno),

    /// A path or argument contained an interior NUL byte and cannot be
    /// passed to the kernel as a C string.
    #[error("{what} contains an interior NUL byte")]
    NulByte { what: String },

    /// A null entry appeared in a nullable argument sequence. Embedded nulls
    /// are rejected outright rather than truncating argv or punching a hole
    /// in it.
    #[error("argument {index} is null")]
    NullArgument { index: usize },

    /// The current executable path could not be determined for a restart.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecError {
    /// Raw OS error code, when the failure originated in the OS.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            ExecError::Os(errno) => Some(*errno as i32),
            ExecError::Io(err) => err.raw_os_error(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_error_exposes_errno_and_message() {
        let err = ExecError::from(Errno::ENOENT);
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn marshalling_errors_have_no_os_code() {
        let err = ExecError::NullArgument { index: 3 };
        assert_eq!(err.raw_os_error(), None);
        assert!(err.to_string().contains('3'));
    }
}
