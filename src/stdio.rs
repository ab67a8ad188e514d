//! Standard descriptor hygiene before process image replacement.
//!
//! Host runtimes commonly open the standard streams with `FD_CLOEXEC` set;
//! without clearing it the replacement image would start with fds 0/1/2
//! closed. Clearing is best-effort: a descriptor that is not open (or not
//! inspectable) is skipped, never an error.

use std::os::fd::RawFd;

use nix::fcntl::{fcntl, FcntlArg, FdFlag};

use crate::error::Result;

const STDIO_FDS: [RawFd; 3] = [
    libc::STDIN_FILENO,
    libc::STDOUT_FILENO,
    libc::STDERR_FILENO,
];

/// Clear `FD_CLOEXEC` on stdin, stdout and stderr so they survive the exec.
///
/// Idempotent; per-descriptor failures are debug-logged and ignored.
pub fn clear_cloexec_on_stdio() {
    for fd in STDIO_FDS {
        if let Err(errno) = clear_cloexec(fd) {
            log::debug!("could not clear FD_CLOEXEC on fd {}: {}", fd, errno);
        }
    }
}

fn clear_cloexec(fd: RawFd) -> nix::Result<()> {
    let flags = FdFlag::from_bits_truncate(fcntl(fd, FcntlArg::F_GETFD)?);
    if flags.contains(FdFlag::FD_CLOEXEC) {
        fcntl(fd, FcntlArg::F_SETFD(flags - FdFlag::FD_CLOEXEC))?;
    }
    Ok(())
}

/// Whether `FD_CLOEXEC` is currently set on `fd`.
pub fn fd_is_cloexec(fd: RawFd) -> Result<bool> {
    let flags = FdFlag::from_bits_truncate(fcntl(fd, FcntlArg::F_GETFD)?);
    Ok(flags.contains(FdFlag::FD_CLOEXEC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::fd::AsRawFd;

    #[test]
    fn stdio_clearing_is_idempotent() {
        clear_cloexec_on_stdio();
        for fd in STDIO_FDS {
            assert!(!fd_is_cloexec(fd).unwrap(), "fd {} still cloexec", fd);
        }
        // Second pass over already-cleared descriptors changes nothing.
        clear_cloexec_on_stdio();
        for fd in STDIO_FDS {
            assert!(!fd_is_cloexec(fd).unwrap());
        }
    }

    #[test]
    fn detects_cloexec_on_regular_files() {
        // Rust's std opens files with O_CLOEXEC.
        let file = std::fs::File::open("/dev/null").unwrap();
        assert!(fd_is_cloexec(file.as_raw_fd()).unwrap());

        clear_cloexec(file.as_raw_fd()).unwrap();
        assert!(!fd_is_cloexec(file.as_raw_fd()).unwrap());
    }

    #[test]
    fn closed_descriptor_reports_error_not_panic() {
        // A descriptor number far past anything the test harness opens.
        assert!(fd_is_cloexec(9999).is_err());
        // clear path swallows the same failure
        assert!(clear_cloexec(9999).is_err());
    }
}
