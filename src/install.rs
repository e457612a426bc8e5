use std::path::PathBuf;

use anyhow::Context;

use console::style;

/// Name the executable is installed under
pub const INSTALLED_NAME: &str = "picotools";

/// Copies the running executable into a system-wide location (`/usr/bin` by
/// default). Linux only.
pub struct Installer {
    prefix: PathBuf,
}

impl Installer {
    pub fn new(prefix: PathBuf) -> Self {
        Self { prefix }
    }

    /// Installs the executable as `<prefix>/picotools`. The copy is staged
    /// inside the prefix and renamed into place, so a failed install never
    /// leaves a partial file at the final path.
    pub fn run(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            cfg!(target_os = "linux"),
            "`picotools install` is only supported on Linux"
        );

        let source = std::env::current_exe().context("Failed to locate the running executable")?;
        let destination = self.prefix.join(INSTALLED_NAME);
        let staging = self.prefix.join(format!(".{INSTALLED_NAME}.tmp"));

        println!(
            "{:>12} to `{}`",
            style("Installing").bold().green(),
            destination.display()
        );

        if let Err(e) = std::fs::copy(&source, &staging) {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                anyhow::bail!(
                    "Insufficient privileges to write to `{}`. Re-run with sudo",
                    self.prefix.display()
                );
            }

            return Err(e).with_context(|| {
                format!("Failed to copy the executable into `{}`", self.prefix.display())
            });
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o755))
                .with_context(|| format!("Failed to mark `{}` executable", staging.display()))?;
        }

        if let Err(e) = std::fs::rename(&staging, &destination) {
            let _ = std::fs::remove_file(&staging);

            return Err(e).with_context(|| {
                format!("Failed to move the executable to `{}`", destination.display())
            });
        }

        println!(
            "{:>12} ({})",
            style("Finished").bold().green(),
            destination.display()
        );

        Ok(())
    }
}
