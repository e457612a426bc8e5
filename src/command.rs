use std::io::ErrorKind;
use std::process::{Command, ExitStatus};

use anyhow::Context;

pub trait CommandExt {
    /// Runs the command to completion with inherited stdio, mapping a
    /// missing executable to a descriptive error.
    fn run_tool(&mut self, tool: &str) -> anyhow::Result<ExitStatus>;
}

impl CommandExt for Command {
    fn run_tool(&mut self, tool: &str) -> anyhow::Result<ExitStatus> {
        match self.status() {
            Ok(status) => Ok(status),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(anyhow::anyhow!(
                "`{tool}` was not found on PATH. Install it and try again"
            )),
            Err(e) => Err(e).with_context(|| format!("Failed to run `{tool}`")),
        }
    }
}

/// Converts a child's [`ExitStatus`] into the exit code this process should
/// report, so build tool failures are propagated unchanged.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code & 0xff).unwrap_or(u8::MAX);
    }

    // No exit code means the child was terminated by a signal
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128u8.wrapping_add(u8::try_from(signal & 0x7f).unwrap_or(0));
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use std::process::Command;

    use super::{CommandExt, exit_code};

    #[test]
    fn missing_tool_is_a_descriptive_error() {
        let error = Command::new("picotools-no-such-tool")
            .run_tool("picotools-no-such-tool")
            .unwrap_err();
        assert!(error.to_string().contains("not found on PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_mirrors_the_child() {
        let status = Command::new("false").status().unwrap();
        assert_eq!(exit_code(status), 1);

        let status = Command::new("true").status().unwrap();
        assert_eq!(exit_code(status), 0);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_maps_above_128() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        // Raw wait status 9: killed by SIGKILL
        let status = ExitStatus::from_raw(9);
        assert_eq!(exit_code(status), 137);
    }
}
