use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::command::CommandExt;

/// Wrapper around the `make` command
pub struct Make;

impl Make {
    fn command() -> Command {
        Command::new("make")
    }

    /// Builds the generated build system in `build_directory`.
    pub fn build(build_directory: &Path) -> anyhow::Result<ExitStatus> {
        Self::command()
            .arg("-C")
            .arg(build_directory)
            .run_tool("make")
    }
}
