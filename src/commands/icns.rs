use clap::CommandFactory;
use iconkit_core::{
    icns::{self, Options},
    process::{ProcessRunner, Tools},
};
use std::{path::PathBuf, process::ExitCode};

pub fn run<C: CommandFactory, R: ProcessRunner>(
    runner: &R,
    tools: &Tools,
    options: &Options,
    images: &[PathBuf],
) -> eyre::Result<ExitCode> {
    super::finish::<C>(icns::generate(runner, tools, options, images).map(|generated| {
        if !generated.failures.is_empty() {
            tracing::warn!(
                "{} of the external tool runs failed, {} may be incomplete",
                generated.failures.len(),
                generated.layout.icns.display()
            );
        }
    }))
}
