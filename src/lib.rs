//! reexec: in-place process image replacement for self-restarting services
//!
//! Wraps the POSIX `execv` primitive so a long-running process can swap in a
//! new program image (typically its own binary, after an upgrade or config
//! change) without losing its pid, parent, working directory or open file
//! descriptors.
//!
//! # Architecture
//!
//! - [`exec`]: the replacement operation — [`exec::replace_process`], its
//!   nullable-sequence front end [`exec::replace_process_nullable`], and the
//!   [`exec::restart`] self-restart convenience
//! - [`stdio`]: best-effort `FD_CLOEXEC` clearing on fds 0/1/2 so the
//!   standard streams survive into the new image
//! - [`error`]: [`error::ExecError`] carrying the platform errno and message
//! - [`cli`]: the `reexec` exec-wrapper binary
//!
//! On success the call never returns; on failure it surfaces the OS error
//! and leaves the process running. Restart policy (terminate, log, retry)
//! belongs to the caller, not this crate.
//!
//! POSIX-only.

#![cfg(unix)]

pub mod cli;
pub mod error;
pub mod exec;
pub mod stdio;

pub use error::{ExecError, Result};
pub use exec::{replace_process, replace_process_nullable, restart};
