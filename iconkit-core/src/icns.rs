//! Building an iconset with the resize tool and packaging it as `.icns`.

use crate::{
    iconset::{IconsetLayout, ICON_SIZES},
    process::{ExitStatus, ProcessRunner, Tools},
    source::SourceImage,
    Error,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

#[derive(Debug, Default, Copy, Clone)]
pub struct Options {
    /// Fail on the first tool that exits unsuccessfully instead of carrying on.
    pub check_status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    pub tool: PathBuf,
    pub output: PathBuf,
    pub status: ExitStatus,
}

#[derive(Debug)]
pub struct Generated {
    pub layout: IconsetLayout,
    /// Unsuccessful tool runs that were tolerated.
    pub failures: Vec<ToolFailure>,
}

pub fn generate<R: ProcessRunner>(
    runner: &R,
    tools: &Tools,
    options: &Options,
    paths: &[PathBuf],
) -> Result<Generated, Error> {
    let path = match paths {
        [] => return Err(Error::NoInput),
        [path] => path,
        _ => return Err(Error::TooManyArguments),
    };
    let layout = IconsetLayout::for_source(SourceImage::new(path)?);
    layout.ensure_iconset_dir()?;

    let mut generator = Generator {
        runner,
        options,
        failures: Vec::new(),
    };
    let source = layout.source.path();
    for size in ICON_SIZES {
        let output = layout.image_path(size);
        let width = size.width.to_string();
        let args = [
            OsString::from("-z"),
            OsString::from(&width),
            OsString::from(&width),
            source.into(),
            OsString::from("--out"),
            output.clone().into(),
        ];
        generator.run(&tools.resize.path, &args, output)?;
    }

    let args = [
        OsString::from("-c"),
        OsString::from("icns"),
        layout.iconset_dir.clone().into(),
        OsString::from("-o"),
        layout.icns.clone().into(),
    ];
    generator.run(&tools.package.path, &args, layout.icns.clone())?;
    tracing::info!("wrote {}", layout.icns.display());

    Ok(Generated {
        failures: generator.failures,
        layout,
    })
}

struct Generator<'a, R> {
    runner: &'a R,
    options: &'a Options,
    failures: Vec<ToolFailure>,
}

impl<'a, R: ProcessRunner> Generator<'a, R> {
    fn run(&mut self, tool: &Path, args: &[OsString], output: PathBuf) -> Result<(), Error> {
        let status = self.runner.run(tool, args)?;
        if status.success() {
            tracing::debug!("generated {}", output.display());
            return Ok(());
        }

        if self.options.check_status {
            return Err(Error::ConversionToolFailed {
                tool: tool.to_owned(),
                status,
            });
        }
        tracing::warn!(
            "{} {} while generating {}",
            tool.display(),
            status.message(),
            output.display()
        );
        self.failures.push(ToolFailure {
            tool: tool.to_owned(),
            output,
            status,
        });
        Ok(())
    }
}
