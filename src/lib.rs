use clap::Parser as _;
use iconkit_core::{
    codec::ImageCrateCodec,
    icns,
    process::{CommandConfig, SystemRunner, Tools},
};
use std::process::ExitCode;

pub mod cli;
pub mod commands;
mod logging;

pub fn gen_icon_main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = cli::GenIcon::parse();
    logging::setup_logger(args.verbose)?;

    commands::ico::run::<cli::GenIcon, _>(&ImageCrateCodec, &args.images)
}

pub fn gen_iconset_main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = cli::GenIconset::parse();
    logging::setup_logger(args.verbose)?;

    let runner = if args.quiet {
        SystemRunner::quiet()
    } else {
        SystemRunner::default()
    };
    let tools = Tools {
        resize: CommandConfig::from_path(args.resize_tool),
        package: CommandConfig::from_path(args.package_tool),
    };
    let options = icns::Options {
        check_status: args.check_status,
    };
    commands::icns::run::<cli::GenIconset, _>(&runner, &tools, &options, &args.images)
}
