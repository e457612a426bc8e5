use std::path::PathBuf;

use clap::ColorChoice;

#[derive(clap::Parser)]
#[command(name = "picotools", version, author, about, long_about)]
pub struct Cli {
    /// Color preferences for program output
    #[clap(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Configure a Pico project with CMake and build it with Make
    Build(BuildArgs),

    /// Copy a built UF2 image to a Pico mounted as a mass storage device
    Upload(UploadArgs),

    /// Remember where the Pico SDK lives so `--sdk-path` is no longer needed
    AttachSdk(AttachSdkArgs),

    /// Install this executable system-wide (Linux only)
    Install(InstallArgs),
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Directory where CMake generates and Make builds
    #[clap(short = 'b', long, value_name = "DIR", default_value = "build")]
    pub build_directory: PathBuf,

    /// Path to the Pico SDK checkout
    #[clap(short = 's', long, value_name = "PATH")]
    pub sdk_path: Option<PathBuf>,

    /// Arguments given to the CMake configure step
    #[clap(raw = true)]
    pub cmake_args: Vec<String>,
}

#[derive(clap::Args)]
pub struct UploadArgs {
    /// Mount point of the Pico mass storage device
    #[clap(short = 'p', long, value_name = "PATH")]
    pub pico_path: PathBuf,

    /// Directory containing the built UF2 image
    #[clap(short = 'b', long, value_name = "DIR", default_value = "build")]
    pub build_directory: PathBuf,

    /// Name of the target to flash; detected from `CMakeLists.txt` when omitted
    #[clap(short = 't', long, value_name = "NAME")]
    pub target: Option<String>,

    /// Build the project before uploading
    #[clap(short = 'B', long)]
    pub build_first: bool,

    /// Pico SDK path used when `--build-first` is given
    #[clap(short = 's', long, value_name = "PATH")]
    pub sdk_path: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct AttachSdkArgs {
    /// Path to the Pico SDK checkout
    #[clap(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(clap::Args)]
pub struct InstallArgs {
    /// Directory to place the executable in
    #[clap(long, value_name = "DIR", default_value = "/usr/bin")]
    pub prefix: PathBuf,
}
