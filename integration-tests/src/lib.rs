use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

// Adapted from
// https://github.com/rust-lang/cargo/blob/485670b3983b52289a2f353d589c57fae2f60f82/tests/testsuite/support/mod.rs#L507
// https://github.com/assert-rs/assert_cmd/blob/3ae01c9cf76e8b652c8ed4d2d64ff53149096339/src/cargo.rs#L192
fn target_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .map(|mut path| {
            path.pop();
            if path.ends_with("deps") {
                path.pop();
            }
            path
        })
        .unwrap()
}

fn exe_name(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

fn cargo_bin(name: &str) -> PathBuf {
    target_dir().join(exe_name(name))
}

const INVOCATIONS_FILE: &str = "invocations";

fn exit_status_file(program: &str) -> String {
    format!("{}.exit-status", program)
}

fn stdout_file(program: &str) -> String {
    format!("{}.stdout", program)
}

/// A temporary directory with copies of the fake tool standing in for the
/// resize and package programs.
pub struct Workdir {
    dir: tempfile::TempDir,
}

impl Workdir {
    const RESIZE_TOOL: &'static str = "sips";
    const PACKAGE_TOOL: &'static str = "iconutil";

    pub fn new() -> Self {
        let dir = tempfile::TempDir::new().unwrap();
        let tools = dir.path().join("tools");
        std::fs::create_dir(&tools).unwrap();
        for name in [Self::RESIZE_TOOL, Self::PACKAGE_TOOL] {
            std::fs::copy(cargo_bin("test-binary"), tools.join(exe_name(name))).unwrap();
        }
        Self { dir }
    }

    pub fn with_exit_status(self, program: &str, exit_status: i32) -> Self {
        std::fs::write(
            self.tools_dir().join(exit_status_file(program)),
            exit_status.to_string(),
        )
        .unwrap();
        self
    }

    pub fn with_stdout(self, program: &str, stdout: impl AsRef<[u8]>) -> Self {
        std::fs::write(self.tools_dir().join(stdout_file(program)), stdout.as_ref()).unwrap();
        self
    }

    pub fn with_file(self, name: &str, contents: impl AsRef<[u8]>) -> Self {
        std::fs::write(self.path().join(name), contents.as_ref()).unwrap();
        self
    }

    /// Directory for inputs and outputs of the tool under test.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn tools_dir(&self) -> PathBuf {
        self.dir.path().join("tools")
    }

    pub fn resize_tool(&self) -> PathBuf {
        self.tools_dir().join(exe_name(Self::RESIZE_TOOL))
    }

    pub fn package_tool(&self) -> PathBuf {
        self.tools_dir().join(exe_name(Self::PACKAGE_TOOL))
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        match std::fs::read_to_string(self.tools_dir().join(INVOCATIONS_FILE)) {
            Ok(s) => s.lines().map(Invocation::parse).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Names of the entries in `dir`, relative to the workdir, sorted.
    pub fn entries(&self, dir: &str) -> Vec<String> {
        let mut names = std::fs::read_dir(self.path().join(dir))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        names.sort();
        names
    }
}

impl Default for Workdir {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn parse(line: &str) -> Invocation {
        let mut fields = line.split('\t').map(|s| s.to_owned());
        let program = fields.next().unwrap_or_default();
        Invocation {
            program,
            args: fields.collect(),
        }
    }

    pub fn assert_args(&self, args: &[impl AsRef<str>]) -> &Self {
        let args = args.iter().map(|s| s.as_ref()).collect::<Vec<_>>();
        assert_eq!(&self.args, &args);
        self
    }
}

fn record_invocation(workdir: &Path, program: &str, args: &[OsString]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(workdir.join(INVOCATIONS_FILE))?;
    let mut line = program.to_owned();
    for arg in args {
        line.push('\t');
        line.push_str(&arg.to_string_lossy());
    }
    line.push('\n');
    file.write_all(line.as_bytes())
}

fn get_exit_status(workdir: &Path, program: &str) -> Option<i32> {
    std::fs::read_to_string(workdir.join(exit_status_file(program)))
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn copy_stdout(workdir: &Path, program: &str) -> std::io::Result<()> {
    let mut file = File::open(workdir.join(stdout_file(program)))?;
    std::io::copy(&mut file, &mut std::io::stdout())?;
    Ok(())
}

fn write_output(args: &[OsString]) -> std::io::Result<()> {
    let output = args
        .iter()
        .position(|a| a == "--out" || a == "-o")
        .and_then(|i| args.get(i + 1));
    if let Some(output) = output {
        std::fs::write(output, b"generated")?;
    }
    Ok(())
}

/// Entry point of the fake tool: records how it was called, echoes its canned
/// stdout and, unless told to fail, creates the file named after `--out` or `-o`.
pub fn test_binary_main() {
    let exe = std::env::current_exe().unwrap();
    let args = std::env::args_os().skip(1).collect::<Vec<_>>();
    let workdir = exe.parent().unwrap().to_owned();
    let program = exe.file_stem().unwrap().to_string_lossy().into_owned();

    let _ = record_invocation(&workdir, &program, &args);
    let _ = copy_stdout(&workdir, &program);
    let exit_status = get_exit_status(&workdir, &program).unwrap_or(0);
    if exit_status == 0 {
        let _ = write_output(&args);
    }
    std::process::exit(exit_status);
}
