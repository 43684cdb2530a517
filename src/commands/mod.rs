use clap::CommandFactory;
use iconkit_core::Error;
use std::process::ExitCode;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub mod icns;
pub mod ico;

fn write_color(text: &str, fg_color: Color) -> std::io::Result<()> {
    use std::io::{IsTerminal as _, Write as _};

    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    stdout.set_color(ColorSpec::new().set_fg(Some(fg_color)))?;
    let result = stdout.write_all(text.as_bytes());
    stdout.reset().ok();
    result
}

/// Turns the outcome of a command into an exit code. Mistakes in how the
/// command was invoked are printed to stdout; anything else becomes an error
/// report.
fn finish<C: CommandFactory>(result: Result<(), Error>) -> eyre::Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_user_error() => {
            write_color(&err.to_string(), Color::Red)?;
            println!();
            if err.is_usage_error() {
                println!("{}", C::command().render_usage());
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
