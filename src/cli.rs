//! Exec-wrapper command line: replace this process with another program.

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Replace the current process image with another program", long_about = None)]
struct Cli {
    /// Program image to execute (a path; PATH is not searched)
    program: OsString,

    /// Arguments for the new image; argv[0] defaults to the program path
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut argv = Vec::with_capacity(cli.args.len() + 1);
    argv.push(cli.program.clone());
    argv.extend(cli.args);

    // Only the failure path returns.
    match crate::exec::replace_process(&cli.program, &argv) {
        Ok(never) => match never {},
        Err(err) => Err(err.into()),
    }
}
