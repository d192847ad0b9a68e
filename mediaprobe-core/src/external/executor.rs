//! Process execution for ffprobe.
//!
//! `ProbeExecutor` abstracts "run this program with these arguments and give
//! me everything it printed". Probing is blocking: the call returns once the
//! child has exited and both output pipes are drained.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Runs an external program to completion and captures its output.
pub trait ProbeExecutor {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<Output>;
}

/// [`ProbeExecutor`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl ProbeExecutor for CommandExecutor {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<Output> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        log::debug!("Executing: {:?}", cmd);
        cmd.output()
    }
}

impl<E: ProbeExecutor + ?Sized> ProbeExecutor for &E {
    fn run(&self, program: &Path, args: &[OsString]) -> io::Result<Output> {
        (**self).run(program, args)
    }
}
