use std::path::PathBuf;

use anyhow::Context;

use console::style;

use crate::build::BuildPipeline;
use crate::cli::{BuildArgs, UploadArgs};
use crate::project::Project;

/// Copies a built UF2 image to a Pico mounted as a mass storage device
pub struct Upload {
    project: Project,
    pico_path: PathBuf,
    build_directory: PathBuf,
    target: Option<String>,
    build_first: Option<BuildArgs>,
}

impl Upload {
    pub fn from_args(args: UploadArgs) -> anyhow::Result<Self> {
        let project = Project::from_current_dir()?;

        let build_first = args.build_first.then(|| BuildArgs {
            build_directory: args.build_directory.clone(),
            sdk_path: args.sdk_path,
            cmake_args: Vec::new(),
        });

        Ok(Self {
            project,
            pico_path: args.pico_path,
            build_directory: args.build_directory,
            target: args.target,
            build_first,
        })
    }

    /// Returns the exit code this process should report; a failing
    /// `--build-first` step propagates its own code.
    pub fn run(self) -> anyhow::Result<u8> {
        anyhow::ensure!(
            self.pico_path.is_dir(),
            "No Pico mounted at `{}`",
            self.pico_path.display()
        );

        if let Some(build_args) = self.build_first {
            let code = BuildPipeline::from_args(build_args)?.run()?;
            if code != 0 {
                return Ok(code);
            }
        }

        let target = match self.target {
            Some(target) => target,
            None => {
                let target = self.project.executable_target()?;
                println!(
                    "{:>12} target `{target}` from CMakeLists.txt",
                    style("Detected").bold().green()
                );

                target
            }
        };

        let uf2_path = self.project.uf2_path(&self.build_directory, &target);
        anyhow::ensure!(
            uf2_path.is_file(),
            "No UF2 image at `{}`. Build the project first with `picotools build`",
            uf2_path.display()
        );

        println!(
            "{:>12} `{}` to `{}`",
            style("Flashing").bold().green(),
            uf2_path.display(),
            self.pico_path.display()
        );

        let destination = self.pico_path.join(format!("{target}.uf2"));
        std::fs::copy(&uf2_path, &destination).with_context(|| {
            format!(
                "Failed to copy `{}` to `{}`",
                uf2_path.display(),
                destination.display()
            )
        })?;

        println!("{:>12} flashing `{target}`", style("Finished").bold().green());

        Ok(0)
    }
}
