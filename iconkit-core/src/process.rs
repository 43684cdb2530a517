use crate::Error;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ExitStatus {
    Successful,
    Failed(Option<i32>),
}

impl ExitStatus {
    pub fn success(&self) -> bool {
        self == &ExitStatus::Successful
    }

    pub fn message(&self) -> String {
        match self {
            ExitStatus::Successful => "exited successfully".to_owned(),
            ExitStatus::Failed(Some(code)) => format!("exited with error status {}", code),
            ExitStatus::Failed(None) => "exited with unknown error status".to_owned(),
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        if status.success() {
            ExitStatus::Successful
        } else {
            ExitStatus::Failed(status.code())
        }
    }
}

/// Runs external programs to completion.
pub trait ProcessRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitStatus, Error>;
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Output {
    Null,
    #[default]
    Inherit,
}

impl From<Output> for Stdio {
    fn from(v: Output) -> Self {
        match v {
            Output::Null => Stdio::null(),
            Output::Inherit => Stdio::inherit(),
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct SystemRunner {
    pub stdout: Output,
    pub stderr: Output,
}

impl SystemRunner {
    pub fn quiet() -> Self {
        SystemRunner {
            stdout: Output::Null,
            ..Default::default()
        }
    }
}

impl ProcessRunner for SystemRunner {
    #[tracing::instrument(level = "debug", skip_all, fields(program = %program.display()))]
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ExitStatus, Error> {
        tracing::debug!(?args, "running");
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(self.stdout)
            .stderr(self.stderr)
            .status()
            .map_err(|e| Error::FailedToStartTool(program.to_owned(), e))?;
        Ok(status.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub path: PathBuf,
}

impl CommandConfig {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        CommandConfig { path: path.into() }
    }
}

/// The external programs used to build an iconset and package it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub resize: CommandConfig,
    pub package: CommandConfig,
}

impl Tools {
    pub const DEFAULT_RESIZE: &'static str = "sips";
    pub const DEFAULT_PACKAGE: &'static str = "iconutil";
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            resize: CommandConfig::from_path(Self::DEFAULT_RESIZE),
            package: CommandConfig::from_path(Self::DEFAULT_PACKAGE),
        }
    }
}
