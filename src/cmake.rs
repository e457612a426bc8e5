use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::command::CommandExt;

/// Wrapper around the `cmake` command
pub struct Cmake;

impl Cmake {
    fn command() -> Command {
        Command::new("cmake")
    }

    /// Configures the project in the current directory, generating the build
    /// system in `build_directory`. The SDK location is handed to the Pico
    /// SDK's CMake integration through the `PICO_SDK_PATH` environment
    /// variable.
    pub fn configure(
        build_directory: &Path,
        sdk_path: &Path,
        extra_args: &[String],
    ) -> anyhow::Result<ExitStatus> {
        Self::command()
            .arg("-S")
            .arg(".")
            .arg("-B")
            .arg(build_directory)
            .args(extra_args)
            .env("PICO_SDK_PATH", sdk_path)
            .run_tool("cmake")
    }
}
