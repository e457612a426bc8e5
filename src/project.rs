use std::path::{Path, PathBuf};

use anyhow::Context;

/// A Pico project rooted at a directory containing a `CMakeLists.txt`
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Opens the project in the current working directory
    pub fn from_current_dir() -> anyhow::Result<Self> {
        let root = std::env::current_dir().context("Failed to get the current directory")?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cmakelists_path(&self) -> PathBuf {
        self.root.join("CMakeLists.txt")
    }

    /// Returns the name of the first executable target declared in the
    /// project's `CMakeLists.txt`
    pub fn executable_target(&self) -> anyhow::Result<String> {
        let path = self.cmakelists_path();
        let contents = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read `{}`. Is this a Pico project?",
                path.display()
            )
        })?;

        executable_target(&contents).ok_or_else(|| {
            anyhow::anyhow!(
                "No `add_executable()` declaration found in `{}`",
                path.display()
            )
        })
    }

    /// Returns the path of the UF2 image that a build of `target` produces
    pub fn uf2_path(&self, build_directory: &Path, target: &str) -> PathBuf {
        self.root.join(build_directory).join(format!("{target}.uf2"))
    }
}

/// Extracts the name of the first `add_executable(<name> ...)` declaration
fn executable_target(cmakelists: &str) -> Option<String> {
    cmakelists
        .split("add_executable")
        .skip(1)
        .find_map(|declaration| {
            let declaration = declaration.trim_start().strip_prefix('(')?;
            let name: String = declaration
                .trim_start()
                .chars()
                .take_while(|c| !c.is_whitespace() && *c != ')')
                .collect();

            (!name.is_empty()).then_some(name)
        })
}
