//! Process image replacement via `execv`.
//!
//! The operation either never returns (the calling process's text, data and
//! stack are replaced in place, keeping the same pid, parent, working
//! directory and surviving descriptors) or fails and returns a typed error,
//! leaving the caller running. Terminating, logging or retrying after a
//! failure is the caller's decision.

use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use nix::unistd::execv;

use crate::error::{ExecError, Result};
use crate::stdio;

/// Replace the current process image with `path`, passing `args` as argv.
///
/// By convention `args[0]` is the program name. The new image inherits the
/// caller's environment unchanged; no envp is constructed. `path` is used
/// as-is: relative paths resolve against the current working directory and
/// `PATH` is never searched.
///
/// Before the exec, `FD_CLOEXEC` is cleared on fds 0/1/2 so the standard
/// streams survive into the new image. Argument marshalling happens first,
/// so a marshalling error ([`ExecError::NulByte`]) leaves the process fully
/// untouched.
///
/// On success this never returns. On failure the kernel's errno comes back
/// as [`ExecError::Os`]; the process is not terminated. Single attempt, no
/// internal retries.
pub fn replace_process<P, S>(path: P, args: &[S]) -> Result<Infallible>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let path_c = to_cstring("path", path.as_ref())?;
    let mut argv = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        argv.push(to_cstring(&format!("argument {}", index), arg.as_ref())?);
    }

    stdio::clear_cloexec_on_stdio();

    log::debug!("replacing process image: path={:?} argv={:?}", path_c, argv);
    let argv_ref: Vec<&CStr> = argv.iter().map(|a| a.as_c_str()).collect();
    execv(&path_c, &argv_ref).map_err(ExecError::from)
}

/// [`replace_process`] for host-style nullable argument sequences.
///
/// A `None` entry anywhere in the sequence is rejected with
/// [`ExecError::NullArgument`] before any side effect: truncating argv at
/// the first null, or translating it to a NULL pointer mid-array, would
/// hand the new image a malformed argument list.
pub fn replace_process_nullable<P, S>(path: P, args: &[Option<S>]) -> Result<Infallible>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let mut argv = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg {
            Some(text) => argv.push(text.as_ref()),
            None => return Err(ExecError::NullArgument { index }),
        }
    }
    replace_process(path, &argv)
}

/// Re-execute the current program in place, preserving pid and argv.
///
/// Builds argv from [`std::env::args_os`] (element 0 included) and execs
/// [`std::env::current_exe`]. Used by long-running services to pick up a new
/// binary or reload themselves without dropping their pid or listening
/// descriptors.
pub fn restart() -> Result<Infallible> {
    let exe = std::env::current_exe()?;
    let argv: Vec<OsString> = std::env::args_os().collect();
    log::info!("restarting in place: {}", exe.display());
    replace_process(exe.as_os_str(), &argv)
}

fn to_cstring(what: &str, text: &OsStr) -> Result<CString> {
    CString::new(text.as_bytes()).map_err(|_| ExecError::NulByte {
        what: what.to_string(),
    })
}
