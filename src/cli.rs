use clap::ArgAction;
use iconkit_core::process::Tools;
use std::path::PathBuf;

/// Converts images to Windows .ico files.
#[derive(clap::Parser)]
#[command(name = "gen-icon", version)]
pub struct GenIcon {
    /// Increases log output, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Source images; each is written to a .ico file next to it
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,
}

/// Builds a macOS iconset from a high-resolution image and packages it as .icns.
#[derive(clap::Parser)]
#[command(name = "gen-iconset", version)]
pub struct GenIconset {
    /// Increases log output, may be repeated
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Sets the program used to resize images
    #[arg(long, env = "ICONKIT_RESIZE_TOOL", default_value = Tools::DEFAULT_RESIZE)]
    pub resize_tool: PathBuf,

    /// Sets the program used to package the iconset
    #[arg(long, env = "ICONKIT_PACKAGE_TOOL", default_value = Tools::DEFAULT_PACKAGE)]
    pub package_tool: PathBuf,

    /// Fails if any of the external tools exits unsuccessfully
    #[arg(long, env = "ICONKIT_CHECK_STATUS")]
    pub check_status: bool,

    /// Discards the standard output of the external tools
    #[arg(short, long)]
    pub quiet: bool,

    /// The source image (1024x1024 recommended)
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,
}
