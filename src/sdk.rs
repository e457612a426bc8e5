use std::path::Path;

use console::style;

use crate::config::Config;

/// File the Pico SDK's CMake integration ships at its root; its absence
/// usually means the path is not an SDK checkout
const SDK_MARKER: &str = "pico_sdk_init.cmake";

/// Registers the Pico SDK location in the user configuration so `build` no
/// longer needs `--sdk-path`
pub fn attach(path: &Path) -> anyhow::Result<()> {
    anyhow::ensure!(
        path.is_dir(),
        "Pico SDK path `{}` is not a directory",
        path.display()
    );

    if !path.join(SDK_MARKER).is_file() {
        eprintln!(
            "{} `{}` does not look like a Pico SDK checkout (no `{SDK_MARKER}`)",
            style("warning:").bold().yellow(),
            path.display()
        );
    }

    let config_path = Config::path()?;
    let mut config = Config::load_from(&config_path)?;
    config.pico_sdk = Some(path.to_path_buf());
    config.save_to(&config_path)?;

    println!(
        "{:>12} Pico SDK at `{}`",
        style("Attached").bold().green(),
        path.display()
    );

    Ok(())
}
