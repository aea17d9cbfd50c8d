//! `quill` command: interactive session, `-e` expressions, or a file.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use quillc::config::USAGE;
use quillc::{driver, init_tracing, Mode, RunConfig, Session};

fn main() -> ExitCode {
    init_tracing();

    let mut config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if config.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }
    config.color = config.color && io::stderr().is_terminal();

    match run(&config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of units that failed to lex or parse.
fn run(config: &RunConfig) -> io::Result<usize> {
    let mut session = Session::new();
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match &config.mode {
        Mode::Repl => {
            let input = io::stdin().lock();
            driver::repl(&mut session, config, input, &mut out, &mut err)?;
            Ok(0)
        }
        Mode::Expressions(exprs) => driver::run_units(
            &mut session,
            config,
            "<expr>",
            exprs.iter().map(String::as_str),
            &mut out,
            &mut err,
        ),
        Mode::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot read {}: {e}", path.display()))
            })?;
            let name = path.display().to_string();
            driver::run_units(&mut session, config, &name, text.lines(), &mut out, &mut err)
        }
    }
}
