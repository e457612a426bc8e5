use std::path::PathBuf;

use anyhow::Context;

use console::style;

use crate::cli::BuildArgs;
use crate::cmake::Cmake;
use crate::command::exit_code;
use crate::config::Config;
use crate::make::Make;
use crate::project::Project;

/// Configures and builds a Pico project by driving `cmake` and `make`
pub struct BuildPipeline {
    project: Project,
    build_directory: PathBuf,
    sdk_path: PathBuf,
    cmake_args: Vec<String>,
}

impl BuildPipeline {
    pub fn from_args(args: BuildArgs) -> anyhow::Result<Self> {
        let project = Project::from_current_dir()?;
        let sdk_path = resolve_sdk_path(args.sdk_path)?;

        Ok(Self {
            project,
            build_directory: args.build_directory,
            sdk_path,
            cmake_args: args.cmake_args,
        })
    }

    /// Runs the configure and build steps, stopping at the first failing
    /// tool. Returns the exit code this process should report, which mirrors
    /// the failing tool's own exit code.
    pub fn run(&self) -> anyhow::Result<u8> {
        let cmakelists = self.project.cmakelists_path();
        anyhow::ensure!(
            cmakelists.exists(),
            "No `CMakeLists.txt` found in `{}`. Is this a Pico project?",
            self.project.root().display()
        );

        let build_directory = self.project.root().join(&self.build_directory);
        std::fs::create_dir_all(&build_directory).with_context(|| {
            format!(
                "Failed to create the build directory `{}`",
                build_directory.display()
            )
        })?;

        println!(
            "{:>12} {}",
            style("Configuring").bold().green(),
            build_directory.display()
        );

        let status = Cmake::configure(&self.build_directory, &self.sdk_path, &self.cmake_args)?;
        if !status.success() {
            return Ok(exit_code(status));
        }

        println!("{:>12} with make", style("Building").bold().green());

        let status = Make::build(&self.build_directory)?;
        if !status.success() {
            return Ok(exit_code(status));
        }

        println!(
            "{:>12} ({})",
            style("Finished").bold().green(),
            build_directory.display()
        );

        Ok(0)
    }
}

/// Returns the SDK path given on the command line, falling back to the one
/// registered with `picotools attach-sdk`
pub fn resolve_sdk_path(sdk_path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let sdk_path = match sdk_path {
        Some(sdk_path) => sdk_path,
        None => Config::load()?.pico_sdk.context(
            "No path to the Pico SDK was given. \
             Pass `--sdk-path <PATH>` or register one with `picotools attach-sdk <PATH>`",
        )?,
    };

    anyhow::ensure!(
        sdk_path.is_dir(),
        "Pico SDK path `{}` is not a directory",
        sdk_path.display()
    );

    Ok(sdk_path)
}
