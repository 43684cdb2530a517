use clap::CommandFactory;
use iconkit_core::{codec::ImageCodec, ico};
use std::{path::PathBuf, process::ExitCode};

pub fn run<C: CommandFactory, I: ImageCodec>(
    codec: &I,
    images: &[PathBuf],
) -> eyre::Result<ExitCode> {
    super::finish::<C>(ico::generate(codec, images).map(|_| ()))
}
